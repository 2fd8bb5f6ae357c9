//! In-memory filtering for the small public content lists. The collections
//! are tiny, so filtering happens after the full fetch, mirroring how the
//! public pages consume them.

use db::models::{blog_post::BlogPost, site_project::SiteProject};

/// Category is an exact (case-insensitive) match; search is a substring match
/// over title and excerpt. Unpublished posts are never returned.
pub fn filter_posts(
    posts: Vec<BlogPost>,
    category: Option<&str>,
    search: Option<&str>,
) -> Vec<BlogPost> {
    let category = category.map(str::to_lowercase);
    let search = search.map(str::to_lowercase);
    posts
        .into_iter()
        .filter(|post| post.published)
        .filter(|post| match &category {
            Some(wanted) => post
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == *wanted),
            None => true,
        })
        .filter(|post| match &search {
            Some(needle) => {
                post.title.to_lowercase().contains(needle)
                    || post
                        .excerpt
                        .as_deref()
                        .is_some_and(|e| e.to_lowercase().contains(needle))
            }
            None => true,
        })
        .collect()
}

pub fn filter_projects(projects: Vec<SiteProject>, category: Option<&str>) -> Vec<SiteProject> {
    let category = category.map(str::to_lowercase);
    projects
        .into_iter()
        .filter(|project| match &category {
            Some(wanted) => project
                .category
                .as_deref()
                .is_some_and(|c| c.to_lowercase() == *wanted),
            None => true,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use chrono::Utc;
    use uuid::Uuid;

    use super::*;

    fn post(title: &str, category: Option<&str>, published: bool) -> BlogPost {
        BlogPost {
            id: Uuid::new_v4(),
            title: title.to_string(),
            slug: title.to_lowercase().replace(' ', "-"),
            excerpt: Some(format!("{title} excerpt")),
            body: None,
            category: category.map(str::to_string),
            cover_image: None,
            published,
            published_at: published.then(Utc::now),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn unpublished_posts_are_hidden() {
        let posts = vec![post("Draft", None, false), post("Live", None, true)];
        let out = filter_posts(posts, None, None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Live");
    }

    #[test]
    fn category_match_is_case_insensitive() {
        let posts = vec![
            post("Panels 101", Some("Guides"), true),
            post("Company news", Some("News"), true),
        ];
        let out = filter_posts(posts, Some("guides"), None);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Panels 101");
    }

    #[test]
    fn search_matches_title_or_excerpt_substring() {
        let posts = vec![
            post("Battery storage", None, true),
            post("Inverter basics", None, true),
        ];
        let out = filter_posts(posts, None, Some("battery"));
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].title, "Battery storage");
    }
}
