//! A single-endpoint webhook bot. Called with the right shared secret,
//! it picks a random word, asks a rhyme dictionary for a match, and
//! posts `"<word> rhymes with <rhyme>"` to a Facebook page.

pub mod config;
pub mod consts;
pub mod generator;
pub mod publisher;
pub mod rhyme;
pub mod server;
pub mod words;
