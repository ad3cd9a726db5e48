use crate::application::markup::Element;

pub const TOPBAR_CONTAINER: &str = "topbar";
pub const PROFILE_BUTTON_ID: &str = "profileBtn";
pub const PROFILE_MENU_ID: &str = "profileMenu";
pub const LOGOUT_BUTTON_ID: &str = "logoutBtn";

pub const BRAND_NAME: &str = "Mockflix";
pub const BROWSE_PAGE: &str = "browse.html";
pub const ACCOUNT_PAGE: &str = "account.html";

/// Which topbar link is highlighted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActiveLink {
    #[default]
    None,
    Account,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopbarView {
    pub active: ActiveLink,
}

impl TopbarView {
    pub fn new(active: ActiveLink) -> Self {
        Self { active }
    }

    /// Rendered with the menu closed.
    pub fn render(&self) -> Element {
        let account_class = match self.active {
            ActiveLink::Account => "active",
            ActiveLink::None => "",
        };

        let menu = Element::new("div")
            .class("menu")
            .id(PROFILE_MENU_ID)
            .attr("aria-hidden", aria_hidden(false))
            .child(
                Element::new("a")
                    .attr("href", ACCOUNT_PAGE)
                    .class(account_class)
                    .text("Account"),
            )
            .child(
                Element::new("button")
                    .class("menu-btn")
                    .id(LOGOUT_BUTTON_ID)
                    .attr("data-testid", "logout")
                    .text("Sign out"),
            );

        let toggle = Element::new("button")
            .class("iconbtn")
            .id(PROFILE_BUTTON_ID)
            .attr("aria-label", "Profile menu")
            .attr("data-testid", "profile-menu")
            .child(Element::new("span").class("avatar"));

        Element::new("div")
            .class("topbar-inner")
            .child(
                Element::new("a")
                    .class("brand")
                    .attr("href", BROWSE_PAGE)
                    .text(BRAND_NAME),
            )
            .child(
                Element::new("div")
                    .class("topbar-right")
                    .child(toggle)
                    .child(menu),
            )
    }
}

pub fn aria_hidden(open: bool) -> &'static str {
    if open { "false" } else { "true" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_starts_hidden() {
        let root = TopbarView::new(ActiveLink::None).render();
        let menu = root.find_by_id(PROFILE_MENU_ID).unwrap();
        assert_eq!(menu.get_attr("aria-hidden"), Some("true"));
    }

    #[test]
    fn test_account_link_marked_active() {
        let root = TopbarView::new(ActiveLink::Account).render();
        assert_eq!(root.find_by_class("active").len(), 1);
        assert_eq!(root.find_by_class("active")[0].text_content(), "Account");

        let idle = TopbarView::new(ActiveLink::None).render();
        assert!(idle.find_by_class("active").is_empty());
    }

    #[test]
    fn test_controls_carry_test_ids() {
        let root = TopbarView::new(ActiveLink::None).render();
        let toggle = root.find_by_id(PROFILE_BUTTON_ID).unwrap();
        assert_eq!(toggle.get_attr("data-testid"), Some("profile-menu"));
        assert_eq!(toggle.get_attr("aria-label"), Some("Profile menu"));

        let logout = root.find_by_id(LOGOUT_BUTTON_ID).unwrap();
        assert_eq!(logout.get_attr("data-testid"), Some("logout"));
        assert_eq!(logout.text_content(), "Sign out");
    }

    #[test]
    fn test_brand_links_to_browse() {
        let html = TopbarView::new(ActiveLink::None).render().to_html();
        assert!(html.starts_with("<div class=\"topbar-inner\"><a class=\"brand\" href=\"browse.html\">Mockflix</a>"));
    }
}
