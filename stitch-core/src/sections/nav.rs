//! Navigation, social and address fragments used by the shared header and
//! footer.
//!
//! Link generators take an href prefix so pages one directory below the
//! site root (`post/…`) reuse the same rule with `"../"`.

use crate::content::{Location, NavLink, SocialLink};
use crate::sections::derive::{platform_name, social_icon};
use crate::sections::{BLOCK_SEP, ICON_SEP, INLINE_SEP, join};

pub fn nav_links(nav: &[NavLink], prefix: &str) -> String {
    join(nav, INLINE_SEP, |item| {
        format!(r#"<a href="{prefix}{}" class="nav-link">{}</a>"#, item.url, item.text)
    })
}

pub fn footer_nav_links(nav: &[NavLink], prefix: &str) -> String {
    join(nav, INLINE_SEP, |item| {
        format!(r#"<a href="{prefix}{}">{}</a>"#, item.url, item.text)
    })
}

/// Icon-only social links.
pub fn social_links(social: &[SocialLink]) -> String {
    join(social, ICON_SEP, |link| {
        format!(
            r#"<a href="{}" target="_blank"><i class="{}"></i></a>"#,
            link.url,
            social_icon(&link.platform)
        )
    })
}

/// Social links with the platform name next to the icon.
pub fn footer_social_links(social: &[SocialLink]) -> String {
    join(social, INLINE_SEP, |link| {
        format!(
            r#"<a href="{}" target="_blank"><i class="{}"></i> {}</a>"#,
            link.url,
            social_icon(&link.platform),
            platform_name(&link.platform)
        )
    })
}

/// Footer address blocks; address lines become `<br>` breaks.
pub fn locations(locations: &[Location]) -> String {
    join(locations, INLINE_SEP, |loc| {
        format!(
            "<p><strong>{}</strong><br>{}</p>",
            loc.name,
            loc.address.replace('\n', "<br>")
        )
    })
}

/// Address blocks on the contact page, with a map marker and indented
/// continuation lines.
pub fn contact_locations(locations: &[Location]) -> String {
    join(locations, BLOCK_SEP, |loc| {
        format!(
            r#"
          <div style="margin-bottom: 16px;">
            <p style="color: var(--color-white);"><i class="fas fa-map-marker-alt" style="color: var(--color-mint); width: 24px;"></i> <strong>{name}</strong><br>
            <span style="opacity: 0.8; margin-left: 24px;">{address}</span></p>
          </div>"#,
            name = loc.name,
            address = loc
                .address
                .replace('\n', r#"<br><span style="margin-left: 24px;">"#)
        )
    })
}
