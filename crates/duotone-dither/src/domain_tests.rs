//! Domain-critical regression tests for duotone-dither.
//!
//! Each test documents the regression it guards against.

#[cfg(test)]
mod domain_tests {
    use crate::api::Duotoner;
    use crate::dither::{bayer_threshold, Atkinson, Dither, DitherAlgorithm, FloydSteinberg};
    use crate::grid::GrayGrid;
    use crate::preprocess::{PreprocessOptions, Preprocessor};
    use crate::theme::{ColorPair, Theme};
    use image::{DynamicImage, GrayImage, Luma, Rgb, RgbImage};

    fn noise_grid(width: usize, height: usize) -> GrayGrid {
        // Cheap deterministic pseudo-random pattern
        GrayGrid::from_fn(width, height, |x, y| {
            ((x * 7919 + y * 104_729 + x * y * 31) % 1000) as f64 / 999.0
        })
    }

    fn photo(width: u32, height: u32) -> DynamicImage {
        DynamicImage::ImageRgb8(RgbImage::from_fn(width, height, |x, y| {
            Rgb([
                (x * 255 / width) as u8,
                (y * 255 / height) as u8,
                ((x + y) * 127 / (width + height)) as u8,
            ])
        }))
    }

    // ========================================================================
    // Shape: every algorithm keeps the grid size
    // ========================================================================

    /// If this breaks, it means: an algorithm drops or invents cells, so
    /// recoloring would index outside the grid or leave holes.
    #[test]
    fn test_all_algorithms_preserve_dimensions() {
        for (w, h) in [(1, 1), (1, 9), (9, 1), (13, 7), (64, 3)] {
            let grid = noise_grid(w, h);
            for algo in DitherAlgorithm::ALL {
                let result = algo.dither(&grid);
                assert_eq!(
                    (result.width(), result.height()),
                    (w, h),
                    "{algo} changed the size of a {w}x{h} grid"
                );
                assert_eq!(result.cells().len(), w * h);
                for y in 0..h {
                    for x in 0..w {
                        let v = result.value(x, y);
                        assert!(v == 0.0 || v == 1.0, "{algo} produced {v}");
                    }
                }
            }
        }
    }

    // ========================================================================
    // Extremes: pure black and pure white survive every algorithm
    // ========================================================================

    /// If this breaks, it means: the threshold comparison lost its strictness
    /// (0.0 lit by a zero threshold) or error leaks into saturated areas.
    #[test]
    fn test_extremes_are_stable() {
        let black = GrayGrid::filled(24, 24, 0.0);
        let white = GrayGrid::filled(24, 24, 1.0);
        for algo in DitherAlgorithm::ALL {
            assert_eq!(
                algo.dither(&black).count_set(),
                0,
                "{algo} lit a black cell"
            );
            assert_eq!(
                algo.dither(&white).count_set(),
                24 * 24,
                "{algo} dropped a white cell"
            );
        }
    }

    // ========================================================================
    // Determinism
    // ========================================================================

    /// If this breaks, it means: randomness or shared state crept into the
    /// engine and two runs over the same input disagree.
    #[test]
    fn test_all_algorithms_are_deterministic() {
        let grid = noise_grid(37, 23);
        for algo in DitherAlgorithm::ALL {
            assert_eq!(
                algo.dither(&grid),
                algo.dither(&grid),
                "{algo} is not deterministic"
            );
        }
    }

    // ========================================================================
    // Ordered dithering is a pure per-cell function
    // ========================================================================

    /// If this breaks, it means: the ordered path started depending on
    /// evaluation order (e.g. carrying error), so it can no longer be
    /// evaluated per tile.
    #[test]
    fn test_ordered_is_order_independent() {
        let grid = noise_grid(19, 17);
        let result = DitherAlgorithm::Ordered.dither(&grid);

        // Evaluate cells back to front and compare
        for y in (0..grid.height()).rev() {
            for x in (0..grid.width()).rev() {
                assert_eq!(
                    result.get(x, y),
                    grid.get(x, y) > bayer_threshold(x, y),
                    "cell ({x}, {y})"
                );
            }
        }
    }

    // ========================================================================
    // Tone reproduction
    // ========================================================================

    /// If this breaks, it means: Floyd-Steinberg no longer propagates the
    /// whole error and flat grays drift away from their density.
    #[test]
    fn test_floyd_steinberg_tracks_gray_level() {
        let size = 32;
        for level in [0.1, 0.25, 0.5, 0.75, 0.9] {
            let grid = GrayGrid::filled(size, size, level);
            let ratio = FloydSteinberg.dither(&grid).count_set() as f64 / (size * size) as f64;
            assert!(
                (ratio - level).abs() < 0.05,
                "REGRESSION: gray {level} produced {ratio:.3} lit cells"
            );
        }
    }

    /// If this breaks, it means: Atkinson was "fixed" to renormalize its
    /// weights. Its discarded quarter pushes midtones towards the extremes.
    #[test]
    fn test_atkinson_keeps_partial_propagation() {
        let grid = GrayGrid::filled(32, 32, 0.25);
        let atkinson = Atkinson.dither(&grid).count_set();
        let fs = FloydSteinberg.dither(&grid).count_set();
        assert!(
            atkinson < fs,
            "Atkinson lit {atkinson} cells, Floyd-Steinberg {fs}; expected fewer"
        );
    }

    /// If this breaks, it means: ordered dithering of a flat field stopped
    /// following the Bayer level count exactly.
    #[test]
    fn test_ordered_flat_field_level_counts() {
        let grid = GrayGrid::filled(16, 16, 0.25);
        // 0.25 > k/64 for k in 0..16: 16 of every 64 cells
        assert_eq!(DitherAlgorithm::Ordered.dither(&grid).count_set(), 64);
    }

    // ========================================================================
    // Geometry: pixel scale and resize
    // ========================================================================

    /// If this breaks, it means: the pixel-scale round trip lost its
    /// restore step or dithers at the wrong resolution.
    #[test]
    fn test_pixel_scale_round_trip() {
        let source = photo(400, 400);

        let prepared = Preprocessor::new(PreprocessOptions::new().pixel_scale(4))
            .process(&source)
            .unwrap();
        assert_eq!((prepared.width, prepared.height), (100, 100));

        let image = Duotoner::new(ColorPair::default())
            .pixel_scale(4)
            .render(&source)
            .unwrap();
        assert_eq!((image.width(), image.height()), (400, 400));

        // The visible result is the 100x100 dither with 4x4 blocks
        let small = DitherAlgorithm::FloydSteinberg.dither(&prepared.grid);
        for y in 0..400 {
            for x in 0..400 {
                assert_eq!(image.grid().get(x, y), small.get(x / 4, y / 4));
            }
        }
    }

    /// If this breaks, it means: an explicit resize no longer overrides the
    /// pixel scale and the output gets blown back up to the source size.
    #[test]
    fn test_resize_overrides_pixel_scale() {
        let image = Duotoner::new(ColorPair::default())
            .resize(200, 100)
            .pixel_scale(4)
            .render(&photo(400, 400))
            .unwrap();
        assert_eq!((image.width(), image.height()), (200, 100));
    }

    // ========================================================================
    // Inversion
    // ========================================================================

    /// If this breaks, it means: the invert flag is applied somewhere other
    /// than right after normalization (e.g. before contrast) and no longer
    /// matches dithering the inverted grid.
    #[test]
    fn test_invert_flag_matches_inverted_grid() {
        let source = photo(48, 32);
        let plain = Preprocessor::new(PreprocessOptions::new().contrast(1.4))
            .process(&source)
            .unwrap();
        let inverted = Preprocessor::new(PreprocessOptions::new().contrast(1.4).invert(true))
            .process(&source)
            .unwrap();

        for algo in DitherAlgorithm::ALL {
            assert_eq!(
                algo.dither(&inverted.grid),
                algo.dither(&plain.grid.inverted()),
                "{algo}"
            );
        }
    }

    /// If this breaks, it means: inverting a white image no longer yields a
    /// fully background-colored output.
    #[test]
    fn test_invert_white_gives_background() {
        let white = DynamicImage::ImageLuma8(GrayImage::from_pixel(10, 10, Luma([255])));
        for algo in DitherAlgorithm::ALL {
            let image = Duotoner::new(ColorPair::default())
                .algorithm(algo)
                .invert(true)
                .render(&white)
                .unwrap();
            assert_eq!(image.grid().count_set(), 0, "{algo}");
        }
    }

    // ========================================================================
    // Recoloring
    // ========================================================================

    /// If this breaks, it means: the theme table or the foreground/background
    /// assignment was swapped.
    #[test]
    fn test_night_theme_recolors_with_exact_values() {
        let half = DynamicImage::ImageLuma8(GrayImage::from_fn(2, 1, |x, _| {
            Luma([if x == 0 { 0 } else { 255 }])
        }));
        let image = Duotoner::new(Theme::Night.into()).render(&half).unwrap();
        assert_eq!(image.to_rgb(), vec![25, 35, 55, 180, 195, 220]);
    }

    /// If this breaks, it means: a lone explicit color started overriding
    /// the theme.
    #[test]
    fn test_explicit_colors_need_both_sides() {
        let black = "#000000".parse().unwrap();
        let white = "#ffffff".parse().unwrap();
        assert_eq!(
            ColorPair::resolve(Some(Theme::Night), Some(black), Some(white)),
            ColorPair::new(black, white)
        );
        assert_eq!(
            ColorPair::resolve(Some(Theme::Night), Some(black), None),
            Theme::Night.colors()
        );
    }
}
