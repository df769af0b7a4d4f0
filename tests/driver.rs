mod tests {
    use myrtio_strip_animator::color::Color;
    use myrtio_strip_animator::{SmartLedsDriver, StripConfig, StripDriver};
    use smart_leds::{RGB8, SmartLedsWrite};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<Vec<RGB8>>,
    }

    impl SmartLedsWrite for Recorder {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            self.frames.push(iterator.into_iter().map(Into::into).collect());
            Ok(())
        }
    }

    struct Failing;

    impl SmartLedsWrite for Failing {
        type Error = ();
        type Color = RGB8;

        fn write<T, I>(&mut self, _iterator: T) -> Result<(), Self::Error>
        where
            T: IntoIterator<Item = I>,
            I: Into<Self::Color>,
        {
            Err(())
        }
    }

    const PURPLE: Color = Color::new(31, 0, 10);

    #[test]
    fn test_writes_expanded_colors() {
        let config = StripConfig {
            pixel_count: 3,
            swapped_pixels: 0,
        };
        let mut driver = SmartLedsDriver::new(Recorder::default(), config);
        assert_eq!(driver.pixel_count(), 3);

        driver.write(&[Color::WHITE, Color::BLACK, PURPLE]);
        assert_eq!(
            driver.writer().frames[0],
            vec![
                RGB8 { r: 255, g: 255, b: 255 },
                RGB8 { r: 0, g: 0, b: 0 },
                RGB8 { r: 255, g: 0, b: 82 },
            ]
        );
    }

    #[test]
    fn test_swapped_prefix() {
        let config = StripConfig {
            pixel_count: 3,
            swapped_pixels: 2,
        };
        let mut driver = SmartLedsDriver::new(Recorder::default(), config);
        assert_eq!(driver.wire_color(1, PURPLE), RGB8 { r: 255, g: 82, b: 0 });
        assert_eq!(driver.wire_color(2, PURPLE), RGB8 { r: 255, g: 0, b: 82 });

        driver.write(&[PURPLE; 3]);
        let recorder = driver.into_inner();
        assert_eq!(
            recorder.frames[0],
            vec![
                RGB8 { r: 255, g: 82, b: 0 },
                RGB8 { r: 255, g: 82, b: 0 },
                RGB8 { r: 255, g: 0, b: 82 },
            ]
        );
    }

    #[test]
    fn test_write_errors_are_swallowed() {
        let config = StripConfig {
            pixel_count: 1,
            swapped_pixels: 0,
        };
        let mut driver = SmartLedsDriver::new(Failing, config);
        driver.write(&[Color::WHITE]);
    }
}
