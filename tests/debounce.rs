mod tests {
    use belt_light_engine::{ButtonSignal, Debouncer};

    #[test]
    fn test_short_press_is_discarded() {
        let signal = ButtonSignal::new();
        let mut debouncer = Debouncer::new(&signal, 10);

        signal.raise();
        for _ in 0..5 {
            assert!(!debouncer.poll(true));
        }
        // Released before the threshold: no commit, signal disarmed.
        assert!(!debouncer.poll(false));
        assert!(!signal.is_raised());
        assert_eq!(debouncer.hold(), 0);

        // Without re-arming, further level changes are ignored.
        for _ in 0..20 {
            assert!(!debouncer.poll(true));
        }
    }

    #[test]
    fn test_press_commits_exactly_once() {
        let signal = ButtonSignal::new();
        let mut debouncer = Debouncer::new(&signal, 10);

        signal.raise();
        let mut commits = 0;
        // threshold + 1 asserted polls commits once, on the last poll.
        for _ in 0..11 {
            if debouncer.poll(true) {
                commits += 1;
            }
        }
        assert_eq!(commits, 1);
        assert_eq!(debouncer.hold(), 0);
        assert!(!signal.is_raised());

        // Keeping the button held does nothing until the next edge re-arms.
        for _ in 0..30 {
            assert!(!debouncer.poll(true));
        }

        signal.raise();
        for _ in 0..11 {
            if debouncer.poll(true) {
                commits += 1;
            }
        }
        assert_eq!(commits, 2);
    }

    #[test]
    fn test_poll_is_inert_without_signal() {
        let signal = ButtonSignal::new();
        let mut debouncer = Debouncer::new(&signal, 10);

        for _ in 0..50 {
            assert!(!debouncer.poll(true));
        }
        assert_eq!(debouncer.hold(), 0);
    }

    #[test]
    fn test_signal_stays_raised_until_consumed() {
        let signal = ButtonSignal::new();
        signal.raise();
        signal.raise();
        assert!(signal.is_raised());
        signal.clear();
        assert!(!signal.is_raised());
    }
}
