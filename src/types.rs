//! Core data types for cyberfolio
//!
//! This module defines the route table and the shapes of the literal
//! portfolio content rendered by the pages.

use chrono::NaiveDate;

/// Pages reachable through the router
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Route {
    #[default]
    Home,
    About,
    Experience,
    Skills,
    Projects,
    Blog,
    Contact,
}

impl Route {
    /// Full route table, including pages not linked from the navbar
    pub fn all() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Experience,
            Route::Skills,
            Route::Projects,
            Route::Blog,
            Route::Contact,
        ]
    }

    /// Routes shown in the navbar, in link order
    pub fn nav() -> &'static [Route] {
        &[
            Route::Home,
            Route::About,
            Route::Experience,
            Route::Projects,
            Route::Blog,
            Route::Contact,
        ]
    }

    pub fn path(&self) -> &'static str {
        match self {
            Route::Home => "/",
            Route::About => "/about",
            Route::Experience => "/experience",
            Route::Skills => "/skills",
            Route::Projects => "/projects",
            Route::Blog => "/blog",
            Route::Contact => "/contact",
        }
    }

    /// Resolve a path such as `/about`, `about/` or `#/about`
    pub fn from_path(path: &str) -> Option<Self> {
        let path = path.trim().trim_start_matches('#');
        let path = path.trim_matches('/');
        Self::all()
            .iter()
            .copied()
            .find(|r| r.path().trim_start_matches('/').eq_ignore_ascii_case(path))
    }

    pub fn label(&self) -> &'static str {
        match self {
            Route::Home => "Home",
            Route::About => "About",
            Route::Experience => "Experience",
            Route::Skills => "Skills",
            Route::Projects => "Projects",
            Route::Blog => "Blog",
            Route::Contact => "Contact",
        }
    }

    /// Position in the navbar, if linked
    pub fn nav_index(&self) -> Option<usize> {
        Self::nav().iter().position(|r| r == self)
    }

    /// Next navbar route, wrapping. Unlinked routes continue from Home.
    pub fn next(&self) -> Self {
        let nav = Self::nav();
        match self.nav_index() {
            Some(i) => nav[(i + 1) % nav.len()],
            None => nav[0],
        }
    }

    /// Previous navbar route, wrapping. Unlinked routes continue from Home.
    pub fn prev(&self) -> Self {
        let nav = Self::nav();
        match self.nav_index() {
            Some(i) => nav[(i + nav.len() - 1) % nav.len()],
            None => nav[0],
        }
    }
}

/// A category of skills on the About page
#[derive(Debug, Clone, Copy)]
pub struct SkillGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

/// A milestone on the About page
#[derive(Debug, Clone, Copy)]
pub struct Highlight {
    pub year: &'static str,
    pub title: &'static str,
    pub description: &'static str,
}

/// A position on the Experience page
#[derive(Debug, Clone, Copy)]
pub struct Job {
    pub title: &'static str,
    pub company: &'static str,
    pub period: &'static str,
    pub description: &'static str,
    pub achievements: &'static [&'static str],
}

/// A skill with proficiency in percent
#[derive(Debug, Clone, Copy)]
pub struct Skill {
    pub name: &'static str,
    pub level: u8,
    pub category: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct Project {
    pub title: &'static str,
    pub description: &'static str,
    pub tech: &'static [&'static str],
    pub link: &'static str,
}

#[derive(Debug, Clone, Copy)]
pub struct BlogPost {
    pub title: &'static str,
    /// ISO date (`YYYY-MM-DD`)
    pub date: &'static str,
    pub excerpt: &'static str,
}

impl BlogPost {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(self.date, "%Y-%m-%d").ok()
    }

    /// Format the date for display
    pub fn formatted_date(&self) -> String {
        self.date()
            .map(|d| d.format("%b %d, %Y").to_string())
            .unwrap_or_else(|| self.date.to_string())
    }
}

/// A contact channel
#[derive(Debug, Clone, Copy)]
pub struct ContactInfo {
    pub kind: &'static str,
    pub value: &'static str,
    pub icon: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_paths_resolve() {
        for route in Route::all() {
            assert_eq!(Route::from_path(route.path()), Some(*route));
        }
    }

    #[test]
    fn test_route_path_normalization() {
        assert_eq!(Route::from_path("#/about"), Some(Route::About));
        assert_eq!(Route::from_path("/blog/"), Some(Route::Blog));
        assert_eq!(Route::from_path("Contact"), Some(Route::Contact));
        assert_eq!(Route::from_path(""), Some(Route::Home));
        assert_eq!(Route::from_path("/admin"), None);
    }

    #[test]
    fn test_skills_is_routable_but_not_linked() {
        assert_eq!(Route::from_path("/skills"), Some(Route::Skills));
        assert!(!Route::nav().contains(&Route::Skills));
        assert_eq!(Route::nav().len(), 6);
    }

    #[test]
    fn test_route_cycle() {
        assert_eq!(Route::Home.next(), Route::About);
        assert_eq!(Route::Contact.next(), Route::Home);
        assert_eq!(Route::Home.prev(), Route::Contact);
        assert_eq!(Route::Skills.next(), Route::Home);
    }

    #[test]
    fn test_blog_date_format() {
        let post = BlogPost { title: "t", date: "2024-01-15", excerpt: "e" };
        assert_eq!(post.formatted_date(), "Jan 15, 2024");

        let broken = BlogPost { title: "t", date: "soon", excerpt: "e" };
        assert_eq!(broken.formatted_date(), "soon");
    }
}
