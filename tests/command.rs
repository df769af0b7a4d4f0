mod tests {
    use myrtio_strip_animator::color::Color;
    use myrtio_strip_animator::command::parse_decimal;
    use myrtio_strip_animator::{
        AnimatorConfig, Command, CommandError, CommandQueue, Mode, ModeController,
    };

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("100"), Ok(100));
        assert_eq!(parse_decimal("0"), Ok(0));
        assert_eq!(parse_decimal("+7"), Ok(7));
        assert_eq!(parse_decimal("\t 12 "), Ok(12));
        assert_eq!(parse_decimal("35px"), Ok(35));
        assert_eq!(parse_decimal(""), Err(CommandError::ParseFailure));
        assert_eq!(parse_decimal("abc"), Err(CommandError::ParseFailure));
        assert_eq!(parse_decimal("-1"), Err(CommandError::ParseFailure));
        assert_eq!(parse_decimal("+-1"), Err(CommandError::ParseFailure));
        assert_eq!(
            parse_decimal("99999999999"),
            Err(CommandError::ParseFailure)
        );
    }

    #[test]
    fn test_parse_commands() {
        assert_eq!(Command::parse_mode("pulse"), Ok(Command::SetMode(Mode::Pulse)));
        assert_eq!(
            Command::parse_mode("blink"),
            Err(CommandError::UnrecognizedMode)
        );
        assert_eq!(
            Command::parse_color("b"),
            Ok(Command::SetColor(Color::BLUE))
        );
        assert_eq!(
            Command::parse_color("blue"),
            Err(CommandError::UnrecognizedColorToken)
        );
        assert_eq!(Command::parse_speed("20"), Ok(Command::SetSpeed(20)));
        assert_eq!(
            Command::parse_pulse_width("65535"),
            Ok(Command::SetPulseWidth(65535))
        );
        assert_eq!(
            Command::parse_pulse_width("65536"),
            Err(CommandError::ParseFailure)
        );
    }

    #[test]
    fn test_error_display() {
        assert_eq!(CommandError::UnrecognizedMode.to_string(), "unrecognized mode");
        assert_eq!(
            CommandError::UnrecognizedColorToken.to_string(),
            "unrecognized color token"
        );
        assert_eq!(CommandError::ParseFailure.to_string(), "not a decimal integer");
    }

    #[test]
    fn test_queue_rejects_when_full() {
        let queue: CommandQueue<2> = CommandQueue::new();
        let sender = queue.sender();

        assert!(queue.is_empty());
        assert_eq!(sender.push(Command::SetSpeed(1)), Ok(()));
        assert_eq!(sender.push(Command::SetSpeed(2)), Ok(()));
        assert_eq!(queue.len(), 2);
        assert_eq!(
            sender.push(Command::SetSpeed(3)),
            Err(Command::SetSpeed(3))
        );
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_drain_applies_in_order() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let sender = queue.sender();
        let mut controller: ModeController<8> = ModeController::new(8, &AnimatorConfig::default());

        sender.push(Command::SetSpeed(10)).unwrap();
        sender.push(Command::SetSpeed(30)).unwrap();
        sender.push_mode("fade").unwrap();
        sender.push_color("p").unwrap();

        assert_eq!(queue.receiver().drain_into(&mut controller), 4);
        assert!(queue.is_empty());
        assert_eq!(controller.speed(), 30);
        assert_eq!(controller.mode(), Mode::Fade);
        assert_eq!(controller.color(), Color::new(31, 0, 31));

        // Nothing left to apply
        assert_eq!(queue.receiver().drain_into(&mut controller), 0);
    }

    #[test]
    fn test_push_rejects_bad_text() {
        let queue: CommandQueue<4> = CommandQueue::new();
        let sender = queue.sender();

        assert_eq!(sender.push_mode("blink"), Err(CommandError::UnrecognizedMode));
        assert_eq!(
            sender.push_color("q"),
            Err(CommandError::UnrecognizedColorToken)
        );
        assert!(queue.is_empty());
    }
}
