mod tests {
    use myrtio_strip_animator::Mode;

    #[test]
    fn test_mode_parse() {
        assert_eq!(Mode::parse_from_str("solid"), Some(Mode::Solid));
        assert_eq!(Mode::parse_from_str("pulse"), Some(Mode::Pulse));
        assert_eq!(Mode::parse_from_str("fade"), Some(Mode::Fade));
        assert_eq!(Mode::parse_from_str("rainbow"), Some(Mode::Rainbow));
        assert_eq!(Mode::parse_from_str("Rainbow"), None);
        assert_eq!(Mode::parse_from_str("strobe"), None);
    }

    #[test]
    fn test_mode_raw_ids() {
        assert_eq!(Mode::Rainbow.as_raw(), 0);
        assert_eq!(Mode::Pulse.as_raw(), 1);
        assert_eq!(Mode::Fade.as_raw(), 2);
        assert_eq!(Mode::Solid.as_raw(), 3);
        assert_eq!(Mode::from_raw(4), None);

        for mode in Mode::ALL {
            assert_eq!(Mode::from_raw(mode.as_raw()), Some(mode));
            assert_eq!(Mode::parse_from_str(mode.as_str()), Some(mode));
        }
    }

    #[test]
    fn test_mode_default() {
        assert_eq!(Mode::default(), Mode::Solid);
    }
}
