/**
 * Shared Types Module
 *
 * App view states and the navigation seam used by the auth flows.
 */

/// Current app view/page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppView {
    /// Landing page
    Home,
    /// Login form
    Login,
    /// Registration form
    Register,
    /// Product management page
    Products,
}

impl AppView {
    pub fn title(&self) -> &'static str {
        match self {
            AppView::Home => "Home",
            AppView::Login => "Login",
            AppView::Register => "Register",
            AppView::Products => "Products",
        }
    }
}

/// Something that can switch the visible page
pub trait Navigator {
    fn navigate(&mut self, to: AppView);
}

impl Navigator for AppView {
    fn navigate(&mut self, to: AppView) {
        *self = to;
    }
}
