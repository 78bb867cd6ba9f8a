pub mod amplify;
pub mod chart;
pub mod config;
pub mod error;
pub mod fetch;
pub mod install;
pub mod prompter;
pub mod search;
pub mod songdata;
pub mod table;

pub use amplify::{Acquire, Amplifier, HttpAcquirer};
pub use chart::{ChartRecord, ChartScanner, common_title_prefix};
pub use config::Config;
pub use error::{Error, Result};
pub use fetch::{Payload, fetch_payload};
pub use install::{install_payload, read_local_payload};
pub use prompter::Prompter;
pub use search::{MochaSearchEngine, SearchEngine, SearchResult};
pub use songdata::{LocalIndex, SongData};
pub use table::{CatalogEntry, DifficultyTable, TableFolder, TableLoader};
