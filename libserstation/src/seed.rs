//! Seed data
//!
//! The feed starts from eight static groups and four demo posts dated a few
//! hours before start-up. A TOML seed file can replace both.

use std::collections::HashSet;
use std::path::Path;

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result, StoreError};
use crate::state::AppState;
use crate::types::{Group, Post};

/// On-disk seed description
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedFile {
    #[serde(default)]
    pub groups: Vec<Group>,
    #[serde(default)]
    pub posts: Vec<SeedPost>,
}

/// A post whose timestamp is given relative to start-up
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedPost {
    pub id: String,
    pub author: String,
    pub content: String,
    pub hours_ago: i64,
    #[serde(default)]
    pub like_count: u32,
    #[serde(default)]
    pub comment_count: u32,
    #[serde(default)]
    pub share_count: u32,
    pub group_id: String,
}

impl SeedPost {
    /// `hours_ago` before `now`, if chrono can represent it
    pub fn created_at(&self, now: DateTime<Utc>) -> Option<DateTime<Utc>> {
        Duration::try_hours(self.hours_ago).and_then(|offset| now.checked_sub_signed(offset))
    }

    fn into_post(self, created_at: DateTime<Utc>) -> Post {
        Post {
            id: self.id,
            author: self.author,
            content: self.content,
            created_at,
            like_count: self.like_count,
            comment_count: self.comment_count,
            share_count: self.share_count,
            group_id: self.group_id,
            liked_by_current_user: false,
        }
    }
}

impl SeedFile {
    /// Load a seed file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(ConfigError::ReadError)?;
        let seed: SeedFile = toml::from_str(&content).map_err(ConfigError::ParseError)?;
        seed.validate()?;
        Ok(seed)
    }

    /// Group and post ids must be unique within the seed.
    pub fn validate(&self) -> Result<()> {
        let mut group_ids = HashSet::new();
        for group in &self.groups {
            if !group_ids.insert(group.id.as_str()) {
                return Err(StoreError::Seed(format!("duplicate group id '{}'", group.id)));
            }
        }

        let mut post_ids = HashSet::new();
        for post in &self.posts {
            if !post_ids.insert(post.id.as_str()) {
                return Err(StoreError::Seed(format!("duplicate post id '{}'", post.id)));
            }
        }

        Ok(())
    }

    /// Build the initial state, dating posts relative to `now`.
    ///
    /// Fails when a post's `hours_ago` is out of range for a timestamp.
    pub fn into_state(self, now: DateTime<Utc>) -> Result<AppState> {
        let posts = self
            .posts
            .into_iter()
            .map(|post| match post.created_at(now) {
                Some(created_at) => Ok(post.into_post(created_at)),
                None => Err(StoreError::Seed(format!(
                    "post '{}': hours_ago {} is out of range",
                    post.id, post.hours_ago
                ))),
            })
            .collect::<Result<Vec<_>>>()?;
        Ok(AppState::new(self.groups, posts))
    }
}

/// The built-in seed
pub fn builtin() -> SeedFile {
    let groups = [
        ("beask", "Beask"),
        ("tuning", "Tuning"),
        ("electric", "Electric"),
        ("canviad", "Canviad"),
        ("off-road", "Off-road"),
        ("cefalafi", "Cefalafi"),
        ("evocortan", "Evocortan"),
        ("gratsit", "Gratsit"),
    ]
    .into_iter()
    .map(|(id, name)| Group::new(id, name))
    .collect();

    let posts = vec![
        SeedPost {
            id: "1".to_string(),
            author: "CarEnthusiast".to_string(),
            content: "Just got back from a track day with my AMG GT. The handling is absolutely \
                      incredible - feels like the car is connected to your thoughts. Anyone else \
                      been to Circuit de Monaco recently?"
                .to_string(),
            hours_ago: 2,
            like_count: 24,
            comment_count: 8,
            share_count: 3,
            group_id: "tuning".to_string(),
        },
        SeedPost {
            id: "2".to_string(),
            author: "ElectricDriver".to_string(),
            content: "Finally made the switch to electric with a Model S Plaid. The instant \
                      torque is addictive and the autopilot features are getting better every \
                      update. Still missing the engine sound though..."
                .to_string(),
            hours_ago: 4,
            like_count: 17,
            comment_count: 12,
            share_count: 5,
            group_id: "electric".to_string(),
        },
        SeedPost {
            id: "3".to_string(),
            author: "OffRoadAddict".to_string(),
            content: "Took the Jeep through some serious mud trails this weekend. Nothing beats \
                      the freedom of exploring places most cars can't go. Who else is planning \
                      some off-road adventures?"
                .to_string(),
            hours_ago: 6,
            like_count: 31,
            comment_count: 15,
            share_count: 7,
            group_id: "off-road".to_string(),
        },
        SeedPost {
            id: "4".to_string(),
            author: "ClassicRestorer".to_string(),
            content: "After 3 years of restoration, my 1967 Mustang is finally roadworthy again. \
                      Original 289 V8, all matching numbers. There's something special about \
                      bringing these classics back to life."
                .to_string(),
            hours_ago: 8,
            like_count: 45,
            comment_count: 22,
            share_count: 9,
            group_id: "beask".to_string(),
        },
    ];

    SeedFile { groups, posts }
}

/// Initial state from the built-in seed
///
/// The built-in offsets are a few hours, so only a clock near the start of
/// representable time can push them out of range; such posts are dated `now`.
pub fn initial_state(now: DateTime<Utc>) -> AppState {
    let seed = builtin();
    let posts = seed
        .posts
        .into_iter()
        .map(|post| {
            let created_at = post.created_at(now).unwrap_or(now);
            post.into_post(created_at)
        })
        .collect();
    AppState::new(seed.groups, posts)
}
