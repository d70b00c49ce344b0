//! Generated TypeScript types for the browser shell live in `generated/`; see `build.rs`.
