//! Example: Rendering coversheets from an in-memory songbook
//!
//! Builds the songbook with the model types directly and prints each
//! rendered page's size, without touching the file system.

use coversheet::{CoversheetBuilder, Ensemble, Song, Songbook};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let songbook = Songbook::new(
        Ensemble::new("Group Name", 2025),
        vec![
            Song::new("Sample Song Title", "Some Composer"),
            Song::new("Longer Song Title That Should Wrap", "Different Person"),
        ],
    );

    let builder = CoversheetBuilder::default();

    for song in songbook.songs() {
        let svg = builder.render_svg(song, songbook.ensemble())?;
        println!("{}: {} bytes of SVG", song.title(), svg.len());
    }

    Ok(())
}
