//! Tests for connector packing, rotation and edge compatibility

#[cfg(test)]
mod tests {
    use pipelock::spatial::connector::{
        Connector, Direction, MAX_WEIGHT, compatible_across_edge,
    };

    fn pattern(up: u8, right: u8, down: u8, left: u8) -> Connector {
        Connector::new(up, right, down, left).expect("weights in range")
    }

    // Tests each direction reads back its own weight
    // Verified by swapping the right and left bit offsets
    #[test]
    fn test_weight_extraction() {
        let connector = pattern(1, 2, 0, 1);
        assert_eq!(connector.weight(Direction::Up), 1);
        assert_eq!(connector.weight(Direction::Right), 2);
        assert_eq!(connector.weight(Direction::Down), 0);
        assert_eq!(connector.weight(Direction::Left), 1);
        assert_eq!(connector.bits(), 0b01_00_10_01);
    }

    // Tests weights above the double line are rejected
    // Verified by removing the range check in new
    #[test]
    fn test_new_rejects_out_of_range_weights() {
        assert!(Connector::new(MAX_WEIGHT + 1, 0, 0, 0).is_none());
        assert!(Connector::new(0, 0, 0, 3).is_none());
        assert_eq!(Connector::new(0, 0, 0, 0), Some(Connector::EMPTY));
    }

    // Tests a quarter turn moves up to right, right to down and so on
    // Verified by rotating counter-clockwise instead
    #[test]
    fn test_rotate_clockwise() {
        let vertical = pattern(1, 0, 1, 0);
        assert_eq!(vertical.rotate(), pattern(0, 1, 0, 1));

        let up_right = pattern(1, 1, 0, 0);
        assert_eq!(up_right.rotate(), pattern(0, 1, 1, 0));
        assert_eq!(up_right.rotated(3), pattern(1, 0, 0, 1));

        let mixed = pattern(2, 1, 0, 0);
        assert_eq!(mixed.rotate(), pattern(0, 2, 1, 0));
    }

    // Tests four quarter turns restore the pattern
    // Verified by dropping the left weight during rotation
    #[test]
    fn test_rotation_is_cyclic() {
        let connector = pattern(2, 1, 0, 1);
        assert_eq!(connector.rotated(4), connector);
        assert_eq!(connector.rotated(5), connector.rotate());
        assert_eq!(connector.rotated(0), connector);
    }

    // Tests rotation group sizes for symmetric, half-turn and asymmetric patterns
    // Verified by always returning four members
    #[test]
    fn test_rotation_group_sizes() {
        assert_eq!(Connector::EMPTY.rotation_group().len(), 1);
        assert_eq!(pattern(1, 1, 1, 1).rotation_group().len(), 1);
        assert_eq!(pattern(2, 2, 2, 2).rotation_group().len(), 1);
        assert_eq!(pattern(1, 0, 1, 0).rotation_group().len(), 2);
        assert_eq!(pattern(1, 2, 1, 2).rotation_group().len(), 2);
        assert_eq!(pattern(1, 1, 0, 0).rotation_group().len(), 4);
        assert_eq!(pattern(0, 1, 1, 1).rotation_group().len(), 4);
        assert!(!Connector::EMPTY.rotation_group().is_empty());
    }

    // Tests symmetric patterns report themselves as locked
    // Verified by comparing against a double rotation
    #[test]
    fn test_rotationally_locked() {
        assert!(Connector::EMPTY.is_rotationally_locked());
        assert!(pattern(1, 1, 1, 1).is_rotationally_locked());
        assert!(!pattern(1, 0, 1, 0).is_rotationally_locked());
        assert!(!pattern(2, 1, 2, 1).is_rotationally_locked());
    }

    // Tests group members are ordered by rotation distance
    // Verified by collecting members into a sorted set
    #[test]
    fn test_rotation_group_steps() {
        let up_right = pattern(1, 1, 0, 0);
        let group = up_right.rotation_group();

        let members: Vec<Connector> = group.iter().collect();
        assert_eq!(
            members,
            vec![
                up_right,
                pattern(0, 1, 1, 0),
                pattern(0, 0, 1, 1),
                pattern(1, 0, 0, 1)
            ]
        );

        assert_eq!(group.steps_to(up_right), Some(0));
        assert_eq!(group.steps_to(pattern(1, 0, 0, 1)), Some(3));
        assert_eq!(group.steps_to(pattern(1, 0, 1, 0)), None);
        assert!(group.contains(pattern(0, 0, 1, 1)));
        assert!(!group.contains(Connector::EMPTY));
    }

    // Tests every member of a group has the same group size
    // Verified by skipping the last member in rotation_group
    #[test]
    fn test_rotation_group_closed() {
        let tee = pattern(1, 1, 0, 1);
        let group = tee.rotation_group();
        for member in group.iter() {
            let member_group = member.rotation_group();
            assert_eq!(member_group.len(), group.len());
            assert!(member_group.contains(tee));
        }
    }

    // Tests opposite directions and step offsets
    // Verified by mapping Up to Left in opposite
    #[test]
    fn test_direction_geometry() {
        for direction in Direction::ALL {
            assert_eq!(direction.opposite().opposite(), direction);
            let [dx, dy] = direction.offset();
            let [ox, oy] = direction.opposite().offset();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
        assert_eq!(Direction::Up.offset(), [0, -1]);
        assert_eq!(Direction::Right.offset(), [1, 0]);
    }

    // Tests edges only match on equal weights
    // Verified by accepting any non-zero pair
    #[test]
    fn test_compatible_across_edge() {
        assert!(compatible_across_edge(0, 0));
        assert!(compatible_across_edge(2, 2));
        assert!(!compatible_across_edge(1, 2));
        assert!(!compatible_across_edge(0, 1));
    }

    // Tests human-readable rendering of weights
    // Verified by printing directions out of order
    #[test]
    fn test_display() {
        assert_eq!(pattern(1, 0, 1, 0).to_string(), "[u1 r0 d1 l0]");
        assert_eq!(pattern(0, 2, 1, 2).to_string(), "[u0 r2 d1 l2]");
    }
}
