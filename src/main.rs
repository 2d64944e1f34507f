//! Demo binary: clips a few fixed sample segments against a
//! [-100, 100] x [-100, 100] window and prints the results.

use linesnip::prelude::*;

fn report(result: &ClipResult) {
    match result {
        ClipResult::Accepted(segment) => println!(
            "Line accepted from {}, {} to {}, {}",
            segment.a.x, segment.a.y, segment.b.x, segment.b.y
        ),
        ClipResult::Rejected => println!("Line rejected"),
    }
}

fn main() -> Result<(), ClipError> {
    let region = ClipRegion::new(-100.0, 100.0, -100.0, 100.0)?;
    let clipper = LineClipper::new(region);

    // Sample segments: one crossing the left boundary, one fully outside
    // on the right, one crossing two boundaries in sequence.
    let samples = [
        (-180.0, 40.0, 50.0, 10.0),
        (120.0, 30.0, 150.0, 40.0),
        (-120.0, 30.0, 30.0, 255.0),
    ];

    for (x1, y1, x2, y2) in samples {
        let result = clipper.clip_line(x1, y1, x2, y2)?;
        report(&result);
    }

    Ok(())
}
