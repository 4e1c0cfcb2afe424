//! Workspace - Main Shell and Route Dispatch
//!
//! The workspace holds the persistent navigation bar and swaps the content
//! area to the view matching the current route.

use gpui::{
    AnyElement, AppContext, Context, Entity, IntoElement, ParentElement, Render, Styled,
    Window, div, prelude::*,
};

use crate::app::entities::AppEntities;
use crate::app::navigation::Route;
use crate::components::layout::navbar::Navbar;
use crate::components::layout::shell::Shell;
use crate::features::about::page::AboutPage;
use crate::features::blog::page::BlogPage;
use crate::features::contact::page::ContactPage;
use crate::features::gallery::page::GalleryPage;
use crate::features::home::page::HomePage;
use crate::features::not_found::page::NotFoundPage;
use crate::features::properties::page::PropertiesPage;

/// Main workspace containing the application layout
pub struct Workspace {
    entities: AppEntities,
    navbar: Entity<Navbar>,
    // Page views, created on first visit and kept for the session
    home_page: Option<Entity<HomePage>>,
    about_page: Option<Entity<AboutPage>>,
    properties_page: Option<Entity<PropertiesPage>>,
    gallery_page: Option<Entity<GalleryPage>>,
    contact_page: Option<Entity<ContactPage>>,
    blog_page: Option<Entity<BlogPage>>,
    not_found_page: Option<Entity<NotFoundPage>>,
}

impl Workspace {
    pub fn new(entities: AppEntities, cx: &mut Context<Self>) -> Self {
        let navbar = cx.new(|cx| Navbar::new(entities.clone(), cx));

        // Re-render when the route changes
        cx.observe(&entities.app, |_this, _, cx| cx.notify()).detach();

        Self {
            entities,
            navbar,
            home_page: None,
            about_page: None,
            properties_page: None,
            gallery_page: None,
            contact_page: None,
            blog_page: None,
            not_found_page: None,
        }
    }

    /// Get or create the page view for the given route
    fn get_or_create_page(&mut self, route: Route, cx: &mut Context<Self>) -> AnyElement {
        match route {
            Route::Home => self
                .home_page
                .get_or_insert_with(|| cx.new(|cx| HomePage::new(cx)))
                .clone()
                .into_any_element(),
            Route::About => self
                .about_page
                .get_or_insert_with(|| cx.new(|cx| AboutPage::new(cx)))
                .clone()
                .into_any_element(),
            Route::Properties => self
                .properties_page
                .get_or_insert_with(|| cx.new(|cx| PropertiesPage::new(cx)))
                .clone()
                .into_any_element(),
            Route::Gallery => self
                .gallery_page
                .get_or_insert_with(|| cx.new(|cx| GalleryPage::new(cx)))
                .clone()
                .into_any_element(),
            Route::Contact => {
                let entities = self.entities.clone();
                self.contact_page
                    .get_or_insert_with(|| cx.new(|cx| ContactPage::new(entities, cx)))
                    .clone()
                    .into_any_element()
            }
            Route::Blog => self
                .blog_page
                .get_or_insert_with(|| cx.new(|cx| BlogPage::new(cx)))
                .clone()
                .into_any_element(),
            Route::NotFound => self
                .not_found_page
                .get_or_insert_with(|| cx.new(|cx| NotFoundPage::new(cx)))
                .clone()
                .into_any_element(),
        }
    }
}

impl Render for Workspace {
    fn render(&mut self, _window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        let route = self.entities.app.read(cx).route();
        let content = self.get_or_create_page(route, cx);

        Shell::new().child(self.navbar.clone()).child(
            div()
                .flex_1()
                .flex()
                .flex_col()
                .overflow_hidden()
                .child(content),
        )
    }
}
