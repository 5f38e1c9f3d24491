use serde::Deserialize;
use std::collections::HashSet;
use std::path::Path;
use std::{fmt, io};

use crate::models::{Board, EntityId, Screen, SubScreen};

#[derive(Debug)]
pub enum SeedError {
    Io(io::Error),
    Parse(serde_json::Error),
    DuplicateId(EntityId),
}

impl fmt::Display for SeedError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SeedError::Io(e) => write!(f, "cannot read seed file: {e}"),
            SeedError::Parse(e) => write!(f, "seed file is not valid JSON: {e}"),
            SeedError::DuplicateId(id) => write!(f, "seed reuses id {id}"),
        }
    }
}

impl std::error::Error for SeedError {}

impl From<io::Error> for SeedError {
    fn from(e: io::Error) -> Self {
        SeedError::Io(e)
    }
}

impl From<serde_json::Error> for SeedError {
    fn from(e: serde_json::Error) -> Self {
        SeedError::Parse(e)
    }
}

#[derive(Debug, Deserialize)]
struct SeedFile {
    screens: Vec<Screen>,
}

/// Load a board from a JSON seed file. Ids must be unique across the whole
/// file; the board's id counter starts past the largest seeded id.
pub fn load_board(path: &Path) -> Result<Board, SeedError> {
    let text = std::fs::read_to_string(path)?;
    let seed: SeedFile = serde_json::from_str(&text)?;

    let mut seen = HashSet::new();
    for screen in &seed.screens {
        if !seen.insert(screen.id) {
            return Err(SeedError::DuplicateId(screen.id));
        }
        for sub in &screen.sub_screens {
            if !seen.insert(sub.id) {
                return Err(SeedError::DuplicateId(sub.id));
            }
        }
    }

    Ok(Board::with_screens(seed.screens))
}

/// The built-in demo board, matching the sample data the app ships with.
pub fn sample_board() -> Board {
    let screens = vec![
        Screen {
            id: EntityId(1),
            title: "Home Screen".into(),
            description: "Main landing page of the application".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1649972904349-6e44c42644a7".to_string(),
            sub_screens: vec![
                SubScreen {
                    id: EntityId(2),
                    title: "Login Form".into(),
                    description: "User login component".to_string(),
                    thumbnail: "https://images.unsplash.com/photo-1488590528505-98d2b5aba04b"
                        .to_string(),
                },
                SubScreen {
                    id: EntityId(3),
                    title: "Hero Section".into(),
                    description: "Main promotional area".to_string(),
                    thumbnail: "https://images.unsplash.com/photo-1518770660439-4636190af475"
                        .to_string(),
                },
            ],
        },
        Screen {
            id: EntityId(4),
            title: "Dashboard".into(),
            description: "User dashboard with analytics".to_string(),
            thumbnail: "https://images.unsplash.com/photo-1461749280684-dccba630e2f6".to_string(),
            sub_screens: vec![SubScreen {
                id: EntityId(5),
                title: "Stats Panel".into(),
                description: "Key metrics visualization".to_string(),
                thumbnail: "https://images.unsplash.com/photo-1486312338219-ce68d2c6f44d"
                    .to_string(),
            }],
        },
    ];
    Board::with_screens(screens)
}

#[cfg(test)]
#[path = "../../tests/unit/services/seed.rs"]
mod tests;
