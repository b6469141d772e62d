use std::path::Path;

use crate::error::ViewerError;
use crate::files::Catalog;

// ---------------------------------------------------------------------------
// Fit-to-screen
// ---------------------------------------------------------------------------

/// Shrink `natural` to fit inside `frame`, keeping the aspect ratio. Never
/// upscales.
///
/// Width is corrected first, then the (possibly already reduced) height is
/// checked against the frame and corrected in turn, rescaling width again.
/// Scaled sides are truncated toward zero.
pub fn fit_to_frame(
    natural_width: u32,
    natural_height: u32,
    frame_width: u32,
    frame_height: u32,
) -> Result<(u32, u32), ViewerError> {
    if natural_width == 0 || natural_height == 0 || frame_width == 0 || frame_height == 0 {
        return Err(ViewerError::InvalidDimensions {
            natural_width,
            natural_height,
            frame_width,
            frame_height,
        });
    }

    let mut width = natural_width;
    let mut height = natural_height;

    if width > frame_width {
        let ratio = frame_width as f64 / width as f64;
        width = frame_width;
        height = (height as f64 * ratio) as u32;
    }

    if height > frame_height {
        let ratio = frame_height as f64 / height as f64;
        height = frame_height;
        width = (width as f64 * ratio) as u32;
    }

    Ok((width, height))
}

/// Natural and scaled size of the image about to be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderInstruction {
    pub natural_width: u32,
    pub natural_height: u32,
    pub width: u32,
    pub height: u32,
}

impl RenderInstruction {
    pub fn fit(natural: (u32, u32), frame: (u32, u32)) -> Result<Self, ViewerError> {
        let (width, height) = fit_to_frame(natural.0, natural.1, frame.0, frame.1)?;
        Ok(Self {
            natural_width: natural.0,
            natural_height: natural.1,
            width,
            height,
        })
    }
}

// ---------------------------------------------------------------------------
// Navigator
// ---------------------------------------------------------------------------

/// Circular cursor over a non-empty catalog.
#[derive(Debug)]
pub struct Navigator {
    catalog: Catalog,
    cursor: usize,
}

impl Navigator {
    pub fn new(catalog: Catalog) -> Result<Self, ViewerError> {
        if catalog.is_empty() {
            return Err(ViewerError::EmptyCatalog {
                dir: catalog.dir().to_path_buf(),
            });
        }
        Ok(Self { catalog, cursor: 0 })
    }

    pub fn advance(&mut self) -> usize {
        self.cursor = (self.cursor + 1) % self.catalog.len();
        self.cursor
    }

    pub fn retreat(&mut self) -> usize {
        let len = self.catalog.len();
        self.cursor = (self.cursor + len - 1) % len;
        self.cursor
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.catalog.len()
    }

    pub fn current(&self) -> &Path {
        self.catalog
            .get(self.cursor)
            .expect("cursor stays below catalog length")
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::{tempdir, TempDir};

    fn navigator_with(count: usize) -> (TempDir, Navigator) {
        let tmp = tempdir().unwrap();
        for i in 0..count {
            fs::write(tmp.path().join(format!("img{i}.png")), []).unwrap();
        }
        let catalog = Catalog::build(tmp.path()).unwrap();
        (tmp, Navigator::new(catalog).unwrap())
    }

    #[test]
    fn no_upscaling_when_image_fits() {
        assert_eq!(fit_to_frame(100, 100, 200, 200).unwrap(), (100, 100));
    }

    #[test]
    fn width_bound_halves_both_sides() {
        assert_eq!(fit_to_frame(400, 200, 100, 100).unwrap(), (100, 50));
    }

    #[test]
    fn height_bound_without_width_violation() {
        assert_eq!(fit_to_frame(200, 400, 100, 100).unwrap(), (50, 100));
    }

    #[test]
    fn width_then_height_correction_runs_sequentially() {
        // (400,400) -> (100,100) on width, then -> (50,50) on height
        assert_eq!(fit_to_frame(400, 400, 100, 50).unwrap(), (50, 50));
    }

    #[test]
    fn scaled_sides_truncate_toward_zero() {
        let (w, h) = fit_to_frame(1000, 333, 100, 100).unwrap();
        assert_eq!(w, 100);
        assert_eq!(h, 33);

        let (w, h) = fit_to_frame(3, 1000, 100, 100).unwrap();
        assert_eq!((w, h), (0, 100));
    }

    #[test]
    fn exact_frame_size_is_untouched() {
        assert_eq!(fit_to_frame(1920, 1080, 1920, 1080).unwrap(), (1920, 1080));
    }

    #[test]
    fn zero_dimensions_are_rejected() {
        for (nw, nh, fw, fh) in [(0, 10, 10, 10), (10, 0, 10, 10), (10, 10, 0, 10), (10, 10, 10, 0)] {
            assert!(matches!(
                fit_to_frame(nw, nh, fw, fh),
                Err(ViewerError::InvalidDimensions { .. })
            ));
        }
    }

    #[test]
    fn render_instruction_keeps_natural_size() {
        let instr = RenderInstruction::fit((4000, 3000), (1920, 1080)).unwrap();
        assert_eq!(instr.natural_width, 4000);
        assert_eq!(instr.natural_height, 3000);
        assert_eq!((instr.width, instr.height), (1440, 1080));
    }

    #[test]
    fn empty_catalog_cannot_build_navigator() {
        let tmp = tempdir().unwrap();
        let catalog = Catalog::build(tmp.path()).unwrap();
        match Navigator::new(catalog) {
            Err(ViewerError::EmptyCatalog { dir }) => assert_eq!(dir, tmp.path()),
            other => panic!("expected EmptyCatalog, got {other:?}"),
        }
    }

    #[test]
    fn starts_at_zero() {
        let (_tmp, nav) = navigator_with(2);
        assert_eq!(nav.cursor(), 0);
        assert_eq!(nav.len(), 2);
        assert_eq!(nav.current(), nav.catalog().paths()[0].as_path());
    }

    #[test]
    fn advance_wraps_after_last() {
        let (_tmp, mut nav) = navigator_with(3);
        let seen: Vec<usize> = (0..3).map(|_| nav.advance()).collect();
        assert_eq!(seen, [1, 2, 0]);
    }

    #[test]
    fn retreat_wraps_before_first() {
        let (_tmp, mut nav) = navigator_with(3);
        let seen: Vec<usize> = (0..3).map(|_| nav.retreat()).collect();
        assert_eq!(seen, [2, 1, 0]);
    }

    #[test]
    fn full_cycle_returns_to_start() {
        for len in 1..=6 {
            let (_tmp, mut nav) = navigator_with(len);
            for start in 0..len {
                while nav.cursor() != start {
                    nav.advance();
                }
                for _ in 0..len {
                    nav.advance();
                }
                assert_eq!(nav.cursor(), start);
                for _ in 0..len {
                    nav.retreat();
                }
                assert_eq!(nav.cursor(), start);
            }
        }
    }

    #[test]
    fn advance_and_retreat_are_inverses() {
        let (_tmp, mut nav) = navigator_with(4);
        for _ in 0..4 {
            let before = nav.cursor();
            nav.advance();
            assert_eq!(nav.retreat(), before);
            nav.retreat();
            assert_eq!(nav.advance(), before);
            nav.advance();
        }
    }

    #[test]
    fn single_image_stays_put() {
        let (_tmp, mut nav) = navigator_with(1);
        assert_eq!(nav.advance(), 0);
        assert_eq!(nav.retreat(), 0);
    }

    #[test]
    fn current_follows_cursor() {
        let (_tmp, mut nav) = navigator_with(2);
        let second = nav.catalog().paths()[1].clone();
        nav.advance();
        assert_eq!(nav.current(), second.as_path());
    }
}
