//! Card grids: stats, feature points, policy sections and the like.

use crate::content::{Card, IconCard, present};
use crate::pages::community::Role;
use crate::pages::dim::{Generation, IntroPoint};
use crate::pages::index::Stat;
use crate::pages::policy::{GepSection, PolicySection};
use crate::pages::team::Partner;
use crate::sections::{BLOCK_SEP, OPTION_SEP, join, join_indexed};

pub fn stats(stats: &[Stat]) -> String {
    join_indexed(stats, BLOCK_SEP, |i, stat| {
        format!(
            r#"
        <div class="stat-item" data-aos="fade-up" data-aos-delay="{delay}">
          <div class="stat-value">{value}</div>
          <div class="stat-label">{label}</div>
        </div>"#,
            delay = i * 50,
            value = stat.value,
            label = stat.label
        )
    })
}

pub fn about_points(points: &[Card]) -> String {
    join_indexed(points, BLOCK_SEP, |i, point| {
        format!(
            r#"
        <div class="card" data-aos="fade-up" data-aos-delay="{delay}">
          <h4>{title}</h4>
          <p>{description}</p>
        </div>"#,
            delay = i * 100,
            title = point.title,
            description = point.description
        )
    })
}

/// Community roles; every call to action leads to the contact page.
pub fn roles(roles: &[Role]) -> String {
    join(roles, BLOCK_SEP, |role| {
        format!(
            r#"
        <div class="service-card">
          <div class="card-icon">
            <i class="{icon}"></i>
          </div>
          <h3>{title}</h3>
          <p>{description}</p>
          <a href="contact.html" class="btn btn-outline-dark btn-sm">{cta}</a>
        </div>"#,
            icon = role.icon,
            title = role.title,
            description = role.description,
            cta = role.cta
        )
    })
}

pub fn benefits(benefits: &[Card]) -> String {
    join(benefits, BLOCK_SEP, |benefit| {
        format!(
            r#"
        <div class="card">
          <h4>{title}</h4>
          <p>{description}</p>
        </div>"#,
            title = benefit.title,
            description = benefit.description
        )
    })
}

/// Reasons to get in touch, centred with a large icon.
pub fn reasons(reasons: &[IconCard]) -> String {
    join(reasons, BLOCK_SEP, |reason| {
        format!(
            r#"
        <div class="card" style="text-align: center;">
          <div class="card-icon" style="margin: 0 auto 20px;">
            <i class="{icon}"></i>
          </div>
          <h4>{title}</h4>
          <p>{description}</p>
        </div>"#,
            icon = reason.icon,
            title = reason.title,
            description = reason.description
        )
    })
}

pub fn intro_points(points: &[IntroPoint]) -> String {
    join(points, BLOCK_SEP, |point| {
        let description = present(&point.description)
            .map(|d| format!("<p>{d}</p>"))
            .unwrap_or_default();
        format!(
            r#"
        <div class="card">
          <h4>{title}</h4>
          {description}
        </div>"#,
            title = point.title
        )
    })
}

pub fn generations(generations: &[Generation]) -> String {
    join(generations, BLOCK_SEP, |g| {
        format!(
            r#"
        <div class="gen-card">
          <div class="gen-header">
            <div class="gen-number">{number}</div>
            <div class="gen-meta">
              <div class="gen-year">Since {year}</div>
              <div class="gen-solution">{solution}</div>
            </div>
          </div>
          <div class="gen-grid">
            <div class="gen-item">
              <div class="gen-item-label">Problem</div>
              <div class="gen-item-value">{problem}</div>
            </div>
            <div class="gen-item">
              <div class="gen-item-label">Deficit Model</div>
              <div class="gen-item-value">{deficit}</div>
            </div>
            <div class="gen-item">
              <div class="gen-item-label">Generation</div>
              <div class="gen-item-value">Gen {number}</div>
            </div>
          </div>
          <div class="gen-description">{description}</div>
        </div>"#,
            number = g.generation,
            year = g.year,
            solution = g.solution,
            problem = g.problem,
            deficit = g.deficit_model,
            description = g.description
        )
    })
}

pub fn privacy_sections(sections: &[PolicySection]) -> String {
    join_indexed(sections, BLOCK_SEP, |i, section| {
        format!(
            r#"
        <div class="policy-card" data-aos="fade-up" data-aos-delay="{delay}">
          <h4>{title}</h4>
          <p>{content}</p>
        </div>"#,
            delay = i * 50,
            title = section.title,
            content = section.content
        )
    })
}

/// Numbered policy sections, each with a bullet list.
pub fn gep_sections(sections: &[GepSection]) -> String {
    join_indexed(sections, BLOCK_SEP, |i, section| {
        let subtitle = present(&section.subtitle)
            .map(|s| format!(r#"<p class="subtitle">{s}</p>"#))
            .unwrap_or_default();
        let items = join(&section.items, OPTION_SEP, |item| format!("<li>{item}</li>"));
        format!(
            r#"
        <div class="policy-card" data-aos="fade-up" data-aos-delay="{delay}">
          <span class="policy-number">{number}</span>
          <h4>{title}</h4>
          {subtitle}
          <ul>
            {items}
          </ul>
        </div>"#,
            delay = i * 50,
            number = section.number,
            title = section.title
        )
    })
}

pub fn mission_points(points: &[IconCard]) -> String {
    join_indexed(points, BLOCK_SEP, |i, point| {
        format!(
            r#"
        <div class="mission-card" data-aos="fade-up" data-aos-delay="{delay}">
          <div class="mission-icon">
            <i class="{icon}"></i>
          </div>
          <h4>{title}</h4>
          <p>{description}</p>
        </div>"#,
            delay = i * 100,
            icon = point.icon,
            title = point.title,
            description = point.description
        )
    })
}

pub fn partners(partners: &[Partner]) -> String {
    join_indexed(partners, BLOCK_SEP, |i, partner| {
        format!(
            r#"
        <div class="partner-item" data-aos="fade-up" data-aos-delay="{delay}">
          <h5>{name}</h5>
          <p>{description}</p>
        </div>"#,
            delay = i * 50,
            name = partner.name,
            description = partner.description
        )
    })
}

/// Splits free text on blank lines into paragraphs.
pub fn story_content(content: Option<&str>) -> String {
    let Some(content) = content.filter(|c| !c.is_empty()) else {
        return String::new();
    };
    content
        .split("\n\n")
        .map(|p| format!("<p>{}</p>", p.trim()))
        .collect::<Vec<_>>()
        .join(BLOCK_SEP)
}
