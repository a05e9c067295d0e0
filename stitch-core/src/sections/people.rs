//! Member directory and team fragments.

use crate::content::{FilterOption, present};
use crate::pages::community::Member;
use crate::pages::team::TeamMember;
use crate::sections::derive::{initials, role_label, social_icon};
use crate::sections::{BLOCK_SEP, OPTION_SEP, join, join_indexed};

/// `<option>` list for a directory filter `<select>`.
pub fn filter_options(options: &[FilterOption]) -> String {
    join(options, OPTION_SEP, |opt| {
        format!(r#"<option value="{}">{}</option>"#, opt.id, opt.name)
    })
}

/// Directory cards. The avatar shows the member's initials; expertise tags
/// and social links are left out entirely when there are none.
pub fn member_cards(members: &[Member]) -> String {
    join_indexed(members, BLOCK_SEP, |i, member| {
        let organization = present(&member.organization).unwrap_or("");

        let expertise = join(&member.expertise, OPTION_SEP, |exp| {
            format!(r#"<span class="expertise-tag">{exp}</span>"#)
        });
        let expertise = if expertise.is_empty() {
            String::new()
        } else {
            format!(r#"<div class="member-expertise">{expertise}</div>"#)
        };

        let social = member
            .social
            .as_ref()
            .map(|profiles| {
                profiles
                    .iter()
                    .map(|(platform, url)| {
                        format!(
                            r#"<a href="{url}" target="_blank" title="{platform}"><i class="{}"></i></a>"#,
                            social_icon(platform)
                        )
                    })
                    .collect::<Vec<_>>()
                    .join(OPTION_SEP)
            })
            .unwrap_or_default();
        let social = if social.is_empty() {
            String::new()
        } else {
            format!(r#"<div class="member-social">{social}</div>"#)
        };

        format!(
            r#"
        <div class="member-card" data-role="{role}" data-country="{country}" data-name="{name}" data-org="{organization}" data-aos="fade-up" data-aos-delay="{delay}">
          <div class="member-header">
            <div class="member-avatar">{initials}</div>
            <div class="member-info">
              <h4>{name}</h4>
              <span class="member-role">{role_label}</span>
              <p class="member-org">{organization}</p>
            </div>
          </div>
          <p class="member-bio">{bio}</p>
          {expertise}
          {social}
        </div>"#,
            role = member.role,
            country = member.country,
            name = member.name,
            delay = i * 50,
            initials = initials(&member.name),
            role_label = role_label(&member.role),
            bio = member.bio
        )
    })
}

/// Team cards with optional LinkedIn and Twitter links. A member without a
/// `social` record gets an empty link row.
pub fn team_cards(team: &[TeamMember]) -> String {
    join_indexed(team, BLOCK_SEP, |i, member| {
        let social = member.social.clone().unwrap_or_default();
        let linkedin = present(&social.linkedin)
            .map(|url| {
                format!(r#"<a href="{url}" target="_blank"><i class="fab fa-linkedin"></i></a>"#)
            })
            .unwrap_or_default();
        let twitter = present(&social.twitter)
            .map(|url| {
                format!(r#"<a href="{url}" target="_blank"><i class="fab fa-twitter"></i></a>"#)
            })
            .unwrap_or_default();

        format!(
            r#"
        <div class="team-card" data-aos="fade-up" data-aos-delay="{delay}">
          <div class="team-image"></div>
          <div class="team-content">
            <h4>{name}</h4>
            <p class="team-role">{role}</p>
            <p class="team-bio">{bio}</p>
            <div class="team-social">
              {linkedin}
              {twitter}
            </div>
          </div>
        </div>"#,
            delay = i * 100,
            name = member.name,
            role = member.role,
            bio = member.bio
        )
    })
}
