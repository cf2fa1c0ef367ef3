//! Prints the tape dimensions without opening the viewer.

use std::path::Path;

use punchtape_core::TapeModel;

pub fn print(path: &Path, model: &TapeModel) {
    let geometry = model.geometry();
    println!("file: {}", path.display());
    println!("bytes: {}", model.byte_count());
    println!("hole pitch: {} px", geometry.hole_pitch());
    println!("tape width: {} px", model.tape_width());
    println!("tape height: {} px", model.tape_height());
}
