//! Navigation bar.

use physio_content::PracticeInfo;
use physio_streaming::escape_html;

use crate::state::PageState;

/// In-page anchors shown in the nav, in order.
pub const NAV_LINKS: [(&str, &str); 6] = [
    ("#home", "Home"),
    ("#services", "Services"),
    ("#approach", "Our Approach"),
    ("#process", "Process"),
    ("#faq", "FAQ"),
    ("#contact", "Contact"),
];

/// Render the sticky navigation bar.
pub fn render_nav(practice: &PracticeInfo, state: &PageState) -> String {
    let links: String = NAV_LINKS
        .iter()
        .map(|(href, label)| format!(r#"<li><a href="{}">{}</a></li>"#, href, label))
        .collect();

    // Without JavaScript the toggle is a link that flips `?menu=open`.
    let (menu_class, toggle_href, expanded) = if state.menu_open {
        ("nav-links active", "/", "true")
    } else {
        ("nav-links", "/?menu=open", "false")
    };

    format!(
        r#"<nav data-section="nav">
    <div class="nav-container">
        <div class="logo">{brand}</div>
        <a class="menu-toggle" href="{toggle_href}" role="button" aria-label="Toggle menu" aria-expanded="{expanded}">&#9776;</a>
        <ul class="{menu_class}" id="nav-links">
            {links}
        </ul>
    </div>
</nav>
"#,
        brand = escape_html(&practice.brand),
    )
}
