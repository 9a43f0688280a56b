/// Error types and result aliases
pub mod errors;
/// Spotify Web API client
pub mod spotify;
/// In-memory storage for Spotify objects
pub mod storage;

pub use spotify::SpotifyClient;
pub use storage::StorageService;
