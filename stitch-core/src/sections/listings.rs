//! Filterable listings: blog posts, resources and events.

use crate::content::{Category, present};
use crate::pages::blog::PostSummary;
use crate::pages::events::Event;
use crate::pages::resources::Resource;
use crate::sections::derive::{category_label, date_parts};
use crate::sections::{BLOCK_SEP, join, join_indexed};

/// Filter buttons; the first one starts out active.
pub fn category_filters(categories: &[Category]) -> String {
    join_indexed(categories, BLOCK_SEP, |i, cat| {
        let active = if i == 0 { " active" } else { "" };
        format!(
            r#"
        <button class="filter-btn{active}" data-filter="{id}">
          <i class="{icon}"></i> {name}
        </button>"#,
            id = cat.id,
            icon = cat.icon,
            name = cat.name
        )
    })
}

/// Blog post cards. `prefix` is prepended to the `post/<slug>.html` link.
pub fn post_cards(posts: &[PostSummary], prefix: &str) -> String {
    join_indexed(posts, BLOCK_SEP, |i, post| {
        let category = present(&post.category);
        let label = category
            .map(|c| format!(r#"<span class="blog-category">{}</span>"#, category_label(c)))
            .unwrap_or_default();
        let subtitle = present(&post.subtitle)
            .map(|s| {
                format!(
                    r#"<h5 style="color: var(--color-primary); margin-bottom: 16px; text-transform: none;">{s}</h5>"#
                )
            })
            .unwrap_or_default();
        let tags = post
            .tags
            .as_ref()
            .map(|tags| {
                let tags: String = tags
                    .iter()
                    .map(|t| format!(r#"<span class="blog-tag">{t}</span>"#))
                    .collect();
                format!(r#"<div class="blog-tags">{tags}</div>"#)
            })
            .unwrap_or_default();

        format!(
            r#"
        <div class="blog-card" data-category="{category}" data-aos="fade-up" data-aos-delay="{delay}">
          {label}
          <h3 style="text-transform: none; font-family: 'Comfortaa', sans-serif; font-size: 1.5rem; margin-bottom: 8px;">{title}</h3>
          {subtitle}
          <p>{excerpt}</p>
          {tags}
          <a href="{prefix}post/{slug}.html" class="btn btn-outline-dark btn-sm">Read More</a>
        </div>"#,
            category = category.unwrap_or("all"),
            delay = i * 100,
            title = post.title,
            excerpt = post.excerpt,
            slug = post.slug
        )
    })
}

fn resource_action(kind: &str) -> &'static str {
    match kind {
        "Game" => "Play Now",
        "PDF" => "Download",
        _ => "Learn More",
    }
}

/// Resource cards. External links open in a new tab.
pub fn resources(resources: &[Resource]) -> String {
    join_indexed(resources, BLOCK_SEP, |i, res| {
        let featured = if res.featured { " featured" } else { "" };
        let target = if res.link.starts_with("http") { r#"target="_blank""# } else { "" };
        format!(
            r#"
        <div class="resource-card{featured}" data-category="{category}" data-aos="fade-up" data-aos-delay="{delay}">
          <span class="resource-type">{kind}</span>
          <h4>{title}</h4>
          <p>{description}</p>
          <a href="{link}" class="btn btn-outline-dark btn-sm" {target}>{action}</a>
        </div>"#,
            category = res.category,
            delay = i * 50,
            kind = res.kind,
            title = res.title,
            description = res.description,
            link = res.link,
            action = resource_action(&res.kind)
        )
    })
}

pub fn upcoming_events(events: &[Event]) -> String {
    join_indexed(events, BLOCK_SEP, |i, event| {
        let date = date_parts(&event.date);
        let featured = if event.featured { " featured" } else { "" };
        format!(
            r#"
        <div class="event-card{featured}" data-aos="fade-up" data-aos-delay="{delay}">
          <div class="event-date">
            <span class="day">{day}</span>
            <span class="month">{month}</span>
          </div>
          <div class="event-content">
            <span class="event-type">{kind}</span>
            <h4>{title}</h4>
            <p>{description}</p>
            <div class="event-meta">
              <span><i class="fas fa-clock"></i> {time}</span>
              <span><i class="fas fa-map-marker-alt"></i> {location}</span>
            </div>
            <a href="{link}" class="btn btn-primary btn-sm">Register</a>
          </div>
        </div>"#,
            delay = i * 100,
            day = date.day,
            month = date.month,
            kind = event.kind,
            title = event.title,
            description = event.description,
            time = event.time,
            location = event.location,
            link = event.link
        )
    })
}

/// Past events drop the time, the registration link and the featured flag.
pub fn past_events(events: &[Event]) -> String {
    join_indexed(events, BLOCK_SEP, |i, event| {
        let date = date_parts(&event.date);
        format!(
            r#"
        <div class="event-card" data-aos="fade-up" data-aos-delay="{delay}">
          <div class="event-date">
            <span class="day">{day}</span>
            <span class="month">{month}</span>
          </div>
          <div class="event-content">
            <span class="event-type">{kind}</span>
            <h4>{title}</h4>
            <p>{description}</p>
            <div class="event-meta">
              <span><i class="fas fa-map-marker-alt"></i> {location}</span>
            </div>
          </div>
        </div>"#,
            delay = i * 50,
            day = date.day,
            month = date.month,
            kind = event.kind,
            title = event.title,
            description = event.description,
            location = event.location
        )
    })
}
