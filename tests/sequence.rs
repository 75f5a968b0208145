mod common;

mod tests {
    use embassy_time::Duration;
    use rover_composer::color::{OFF, rgb};
    use rover_composer::{Rgb, SequenceError, SequencePlayer, SequenceStep};

    use super::common::{RecordingStrip, at};

    const RED: Rgb = rgb(150, 0, 0);
    const BLUE: Rgb = rgb(0, 0, 150);
    const WHITE: Rgb = rgb(90, 90, 90);

    static THREE_STEPS: [SequenceStep<2>; 3] = [
        SequenceStep::solid(RED, 100),
        SequenceStep::new([BLUE, OFF], 100),
        SequenceStep::solid(WHITE, 100),
    ];

    static FLASH: [SequenceStep<2>; 2] = [
        SequenceStep::solid(RED, 0),
        SequenceStep::solid(OFF, 0),
    ];

    #[test]
    fn test_play_rejects_empty_sequence() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, true, at(0)).unwrap();

        assert_eq!(
            player.play(&strip, &[], true, at(10)),
            Err(SequenceError::EmptySequence)
        );
        assert!(player.is_active());
        player.tick(&mut strip, at(100));
        assert_eq!(player.step_index(), 1);
    }

    #[test]
    fn test_looping_sequence_wraps_to_first_step() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, true, at(0)).unwrap();

        let mut now = 0;
        for _round in 1..=5 {
            for _ in 0..THREE_STEPS.len() {
                now += 100;
                player.tick(&mut strip, at(now));
            }
            assert!(player.is_active());
            assert!(player.is_fading());
            assert_eq!(player.step_index(), 0);
            assert_eq!(strip.last(), Some([WHITE; 2]));
        }
    }

    #[test]
    fn test_one_shot_sequence_ends_on_last_target() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, false, at(0)).unwrap();

        player.tick(&mut strip, at(100));
        assert_eq!(strip.last(), Some([RED; 2]));
        player.tick(&mut strip, at(200));
        assert_eq!(strip.last(), Some([BLUE, OFF]));
        player.tick(&mut strip, at(299));
        assert!(player.is_active());

        player.tick(&mut strip, at(300));
        assert!(!player.is_active());
        assert!(!player.is_fading());
        assert_eq!(strip.last(), Some([WHITE; 2]));

        let writes = strip.writes.len();
        for t in (310..2_000).step_by(10) {
            player.tick(&mut strip, at(t));
        }
        assert_eq!(strip.writes.len(), writes);
    }

    #[test]
    fn test_steps_fade_from_previous_target() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, false, at(0)).unwrap();

        player.tick(&mut strip, at(100));
        player.tick(&mut strip, at(150));
        assert_eq!(strip.last(), Some([rgb(75, 0, 75), rgb(75, 0, 0)]));
    }

    #[test]
    fn test_zero_duration_steps_advance_every_tick() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &FLASH, true, at(0)).unwrap();

        for t in 0..6 {
            player.tick(&mut strip, at(t * 10));
        }
        assert_eq!(
            strip.writes,
            vec![[RED; 2], [OFF; 2], [RED; 2], [OFF; 2], [RED; 2], [OFF; 2]]
        );
    }

    #[test]
    fn test_new_sequence_preempts_running_one() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, true, at(0)).unwrap();
        player.tick(&mut strip, at(50));

        player.play(&strip, &FLASH, false, at(60)).unwrap();
        player.tick(&mut strip, at(60));
        assert_eq!(strip.last(), Some([RED; 2]));
        player.tick(&mut strip, at(70));
        assert_eq!(strip.last(), Some([OFF; 2]));
        assert!(!player.is_active());
    }

    #[test]
    fn test_fade_to_cancels_sequence() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, true, at(0)).unwrap();

        player.fade_to(&strip, [BLUE; 2], Duration::from_millis(200), at(10));
        assert!(!player.is_active());
        assert!(player.is_fading());

        player.tick(&mut strip, at(210));
        assert_eq!(strip.last(), Some([BLUE; 2]));
        assert!(!player.is_fading());
        player.tick(&mut strip, at(500));
        assert_eq!(strip.writes.len(), 1);
    }

    #[test]
    fn test_stop_turns_strip_off() {
        let mut strip = RecordingStrip::<2>::new();
        let mut player = SequencePlayer::new();
        player.play(&strip, &THREE_STEPS, true, at(0)).unwrap();
        player.tick(&mut strip, at(40));

        player.stop(&mut strip);
        assert!(!player.is_active());
        assert_eq!(strip.last(), Some([OFF; 2]));

        let writes = strip.writes.len();
        player.tick(&mut strip, at(400));
        assert_eq!(strip.writes.len(), writes);
    }
}
