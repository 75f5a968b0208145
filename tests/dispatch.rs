mod tests {
    use embassy_time::Duration;
    use rover_composer::assets::{self, ROVER_LEDS};
    use rover_composer::color::rgb;
    use rover_composer::dispatch::{DRIVE_PULSE, KEYMAP_CAPACITY};
    use rover_composer::{Action, Direction, Frame, Keymap, KeymapError, SequenceStep};

    use Direction::{Forward as F, Neutral as N, Reverse as R};

    static ONE_STEP: [SequenceStep<1>; 1] = [SequenceStep::solid(rgb(1, 1, 1), 10)];
    static ONE_FRAME: [Frame; 1] = [Frame::BLANK];

    fn keymap() -> Keymap<ROVER_LEDS> {
        Keymap::rover_default().unwrap()
    }

    #[test]
    fn test_default_keymap_drive_codes() {
        let keymap = keymap();
        let expected = [
            (64, [F, F, F, F]),
            (25, [R, R, R, R]),
            (7, [R, F, F, R]),
            (9, [F, R, R, F]),
            (68, [R, F, R, F]),
            (67, [F, R, F, R]),
        ];
        for (code, wheels) in expected {
            assert_eq!(
                keymap.dispatch(code),
                Action::Drive {
                    wheels,
                    duration: DRIVE_PULSE
                }
            );
        }
        assert_eq!(DRIVE_PULSE, Duration::from_millis(400));
    }

    #[test]
    fn test_default_keymap_light_codes() {
        let keymap = keymap();
        assert_eq!(
            keymap.dispatch(69),
            Action::RgbStart {
                sequence: &assets::POLICE,
                looping: true
            }
        );
        assert_eq!(
            keymap.dispatch(22),
            Action::RgbStart {
                sequence: &assets::SCANNER,
                looping: true
            }
        );
        assert_eq!(keymap.dispatch(13), Action::RgbStop);
    }

    #[test]
    fn test_default_keymap_matrix_codes() {
        let keymap = keymap();
        assert_eq!(
            keymap.dispatch(24),
            Action::MatrixStart {
                frames: &assets::TALK,
                delay: Duration::from_millis(200)
            }
        );
        assert_eq!(
            keymap.dispatch(94),
            Action::MatrixStart {
                frames: &assets::BLINK,
                delay: Duration::from_millis(80)
            }
        );
        assert_eq!(keymap.dispatch(12), Action::MatrixShowStatic(assets::FACE));
        assert_eq!(keymap.dispatch(82), Action::MatrixShowStatic(Frame::BLANK));
        assert_eq!(keymap.len(), 20);
    }

    #[test]
    fn test_unmapped_and_sentinel_codes_are_noop() {
        let keymap = keymap();
        for code in [-1, -2, i32::MIN, 0, 1, 255, 256, 64 + 256, i32::MAX] {
            assert_eq!(keymap.dispatch(code), Action::NoOp, "code {code}");
        }
    }

    #[test]
    fn test_empty_keymap_is_noop() {
        let keymap = Keymap::<ROVER_LEDS>::new();
        assert!(keymap.is_empty());
        assert_eq!(keymap.dispatch(64), Action::NoOp);
    }

    #[test]
    fn test_bind_validates_assets() {
        let mut keymap = Keymap::<1>::new();
        assert_eq!(
            keymap.bind(
                1,
                Action::RgbStart {
                    sequence: &[],
                    looping: false
                }
            ),
            Err(KeymapError::EmptySequence)
        );
        assert_eq!(
            keymap.bind(
                2,
                Action::MatrixStart {
                    frames: &[],
                    delay: Duration::from_millis(10)
                }
            ),
            Err(KeymapError::EmptyFrames)
        );
        assert!(keymap.is_empty());

        let play = Action::RgbStart {
            sequence: &ONE_STEP,
            looping: false,
        };
        keymap.bind(1, play).unwrap();
        keymap
            .bind(
                2,
                Action::MatrixStart {
                    frames: &ONE_FRAME,
                    delay: Duration::from_millis(10),
                },
            )
            .unwrap();
        assert_eq!(keymap.dispatch(1), play);
    }

    #[test]
    fn test_rebind_replaces_action() {
        let mut keymap = Keymap::<1>::new();
        keymap.bind(5, Action::RgbStop).unwrap();
        keymap.bind(5, Action::MatrixStop).unwrap();
        assert_eq!(keymap.len(), 1);
        assert_eq!(keymap.dispatch(5), Action::MatrixStop);
    }

    #[test]
    fn test_bind_capacity() {
        let mut keymap = Keymap::<1>::new();
        for code in 0..KEYMAP_CAPACITY {
            keymap.bind(code as u8, Action::RgbStop).unwrap();
        }
        assert_eq!(
            keymap.bind(200, Action::RgbStop),
            Err(KeymapError::CapacityExceeded)
        );
        assert_eq!(keymap.dispatch(200), Action::NoOp);
    }

    #[test]
    fn test_scanner_sweeps_back_and_forth() {
        let heads: Vec<usize> = assets::SCANNER
            .iter()
            .map(|step| {
                step.target
                    .iter()
                    .position(|led| *led == rgb(150, 0, 0))
                    .unwrap()
            })
            .collect();
        assert_eq!(heads, vec![0, 1, 2, 3, 4, 5, 6, 7, 6, 5, 4, 3, 2, 1]);
        assert_eq!(assets::SCANNER[8].target[7], rgb(40, 0, 0));
    }

    #[test]
    fn test_default_bindings_use_neutral_only_for_stop() {
        let keymap = keymap();
        let Action::Drive { wheels, .. } = keymap.dispatch(64) else {
            panic!("64 must drive");
        };
        assert!(!wheels.contains(&N));
    }
}
