//! Spotman - Spotify Web API client with a local object store
//!
//! This library obtains an OAuth2 client-credentials access token, fetches
//! track/artist/album metadata from the Spotify Web API and optionally keeps
//! the fetched objects in a local in-memory keyed store.

/// Client modules for interacting with the Spotify Web API and local storage
pub mod clients;
