//! Configuration section definitions.
//!
//! Each module corresponds to a top-level key in `episodes.yml`:
//!
//! | Module    | YAML key    | Purpose                          |
//! |-----------|-------------|----------------------------------|
//! | `show`    | `podcast:`  | Channel metadata                 |
//! | `episode` | `episodes:` | Ordered feed items               |

mod episode;
mod show;

pub use episode::Episode;
pub use show::ShowConfig;

pub(crate) use episode::RawEpisode;
pub(crate) use show::RawShow;
