//! # TUI Components
//!
//! All UI components for the terminal interface. Each one is stateless:
//! it receives everything it draws as props, owns the `Rect` it is given,
//! and redraws it from scratch every frame.
//!
//! - `ArtistList`: left pane, artist names windowed around the selection
//! - `ConcertDetail`: right pane, the selected artist's concerts
//! - `Footer`: key guide and list position
//!
//! ## Props-Based Data Flow
//!
//! Components receive external data as "props", not by reaching into
//! global state. This makes dependencies explicit and components testable.
//!
//! ```rust,ignore
//! // Good: Dependencies are explicit
//! ArtistList::new(nav.artists(), nav.selected(), layout).render(frame, area);
//! ```
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs             (this file)
//! ├── artist_list.rs     (Left pane)
//! ├── concert_detail.rs  (Right pane)
//! └── footer.rs          (Bottom guide)
//! ```

pub mod artist_list;
pub mod concert_detail;
pub mod footer;

pub use artist_list::ArtistList;
pub use concert_detail::ConcertDetail;
pub use footer::Footer;
