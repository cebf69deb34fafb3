/*
 * Copyright 2025 Oxide Computer Company
 */

use schemars::JsonSchema;
use serde::Serialize;

/**
 * One portfolio entry.  The x/y pair positions the project card on the
 * explorable canvas rendered by the front end; the page script treats the
 * world centre as the origin.
 */
#[derive(Debug, Clone, PartialEq, Serialize, JsonSchema)]
pub(crate) struct Project {
    pub id: String,
    pub title: String,
    pub description: String,
    pub x: f64,
    pub y: f64,
    #[serde(rename = "imageUrl")]
    pub image_url: String,
    #[serde(rename = "linkUrl")]
    pub link_url: String,
}

impl Project {
    fn new(
        id: &str,
        title: &str,
        description: &str,
        x: f64,
        y: f64,
        image_url: &str,
        link_url: &str,
    ) -> Project {
        Project {
            id: id.into(),
            title: title.into(),
            description: description.into(),
            x,
            y,
            image_url: image_url.into(),
            link_url: link_url.into(),
        }
    }
}

/**
 * Produce the full set of portfolio projects, in display order.  The catalogue
 * is hardcoded by design; each call constructs a fresh set from these
 * constants.
 */
pub(crate) fn listing() -> Vec<Project> {
    vec![
        Project::new(
            "p1",
            "E-Commerce Platform",
            "Full-stack shopping site",
            -480.0,
            -400.0,
            "https://via.placeholder.com/300x200/4F46E5/ffffff?text=E-Commerce",
            "https://github.com",
        ),
        Project::new(
            "p2",
            "Chat Application",
            "Real-time messaging app",
            480.0,
            -400.0,
            "https://via.placeholder.com/300x200/10B981/ffffff?text=Chat+App",
            "https://github.com",
        ),
        Project::new(
            "p3",
            "Game Portal",
            "Mini game collection",
            -480.0,
            400.0,
            "https://via.placeholder.com/300x200/F59E0B/ffffff?text=Game+Portal",
            "https://github.com",
        ),
        Project::new(
            "p4",
            "Analytics Dashboard",
            "Data visualization",
            480.0,
            400.0,
            "https://via.placeholder.com/300x200/EF4444/ffffff?text=Analytics",
            "https://github.com",
        ),
        Project::new(
            "p5",
            "Music Player",
            "Web music player",
            150.0,
            -500.0,
            "https://via.placeholder.com/300x200/8B5CF6/ffffff?text=Music+Player",
            "https://github.com",
        ),
    ]
}

#[cfg(test)]
mod test {
    use super::*;
    use anyhow::Result;

    #[test]
    fn listing_has_five_entries_in_order() {
        let l = listing();

        assert_eq!(l.len(), 5);
        assert_eq!(
            l.iter().map(|p| p.id.as_str()).collect::<Vec<_>>(),
            vec!["p1", "p2", "p3", "p4", "p5"],
        );
    }

    #[test]
    fn listing_ids_are_unique() {
        let l = listing();

        let mut ids =
            l.iter().map(|p| p.id.as_str()).collect::<Vec<_>>();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), l.len());
    }

    #[test]
    fn listing_matches_catalogue() {
        let cases = vec![
            ("p1", "E-Commerce Platform", "Full-stack shopping site", -480.0,
                -400.0),
            ("p2", "Chat Application", "Real-time messaging app", 480.0,
                -400.0),
            ("p3", "Game Portal", "Mini game collection", -480.0, 400.0),
            ("p4", "Analytics Dashboard", "Data visualization", 480.0, 400.0),
            ("p5", "Music Player", "Web music player", 150.0, -500.0),
        ];

        for (p, (id, title, description, x, y)) in
            listing().iter().zip(cases.into_iter())
        {
            println!("case {:?} -> {:?}", id, p);
            assert_eq!(p.id, id);
            assert_eq!(p.title, title);
            assert_eq!(p.description, description);
            assert_eq!(p.x, x);
            assert_eq!(p.y, y);
            assert!(p.image_url.starts_with("https://via.placeholder.com/"));
            assert_eq!(p.link_url, "https://github.com");
        }
    }

    #[test]
    fn wire_format_uses_camel_case_keys() -> Result<()> {
        let v = serde_json::to_value(listing())?;

        let third = &v[2];
        assert_eq!(third["id"], "p3");
        assert_eq!(third["x"], -480.0);
        assert_eq!(third["y"], 400.0);

        let obj = third.as_object().unwrap();
        let mut keys = obj.keys().map(|k| k.as_str()).collect::<Vec<_>>();
        keys.sort_unstable();
        assert_eq!(
            keys,
            vec![
                "description",
                "id",
                "imageUrl",
                "linkUrl",
                "title",
                "x",
                "y",
            ],
        );
        Ok(())
    }

    #[test]
    fn listing_is_stable_across_calls() -> Result<()> {
        let a = serde_json::to_string(&listing())?;
        let b = serde_json::to_string(&listing())?;

        assert_eq!(a, b);
        Ok(())
    }
}
