#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use crate::cell::{Cell, Color};
    use crate::error::PuzzleError;
    use crate::loader::{load_puzzle_from_file, read_puzzle};
    use crate::location::Location;
    use crate::parser::parse_raw_puzzle;
    use crate::Board;

    fn color(ch: char) -> Color {
        Color::try_from(ch).unwrap()
    }

    fn parse(text: &str) -> Board {
        parse_raw_puzzle(read_puzzle("test".into(), Cursor::new(text)).unwrap()).unwrap()
    }

    #[test]
    fn parse_example() {
        let board = parse("A.B\n...\nB.A\n");

        assert_eq!(board.size(), 3);
        assert_eq!(board.colors(), vec![color('A'), color('B')]);
        assert_eq!(board.terminals(color('A')), &[Location(0, 0), Location(2, 2)]);
        assert_eq!(board.terminals(color('B')), &[Location(0, 2), Location(2, 0)]);

        assert_eq!(format!("{}", board), "A.B
...
B.A
");
    }

    #[test]
    fn round_trip_cells() {
        let source = ["A.B", "...", "B.A"];
        let board = parse(&source.join("\n"));

        for (r, line) in source.iter().enumerate() {
            for (c, ch) in line.chars().enumerate() {
                let expected = match ch {
                    '.' => Cell::Empty,
                    ch => Cell::Terminus(color(ch)),
                };
                assert_eq!(board.get(Location(r, c)), expected);
            }
        }
    }

    #[test]
    fn lowercase_folds_to_uppercase() {
        let board = parse("a.A\n...\nA.a\n");

        assert_eq!(board.colors(), vec![color('A')]);
        assert_eq!(
            board.terminals(color('a')),
            &[Location(0, 0), Location(0, 2), Location(2, 0), Location(2, 2)],
        );
        assert_eq!(board.get(Location(0, 0)), Cell::Terminus(color('A')));

        assert_eq!(format!("{}", board), "A.A
...
A.A
");
    }

    #[test]
    fn blank_lines_ignored_anywhere() {
        let with_blanks = parse("\nA.B\n   \n...\n\nB.A\n\n");
        let without = parse("A.B\n...\nB.A\n");

        assert_eq!(with_blanks.size(), without.size());
        assert_eq!(with_blanks.colors(), without.colors());
        assert_eq!(format!("{}", with_blanks), format!("{}", without));
    }

    #[test]
    fn empty_input_rejected() {
        for text in ["", "\n\n", "   \n\t\n"] {
            let err = read_puzzle("blank".into(), Cursor::new(text)).unwrap_err();
            assert!(matches!(err, PuzzleError::EmptyInput { .. }), "{:?}", err);
        }
    }

    #[test]
    fn non_rectangular_rejected_at_load() {
        let err = read_puzzle("ragged".into(), Cursor::new("AB\nC\n")).unwrap_err();

        assert!(
            matches!(err, PuzzleError::NonRectangularGrid { row: 1, len: 1, expected: 2, .. }),
            "{:?}",
            err,
        );
    }

    #[test]
    fn rectangular_but_not_square_rejected_at_parse() {
        // 2 rows of width 3: passes the loader, fails squareness
        let raw = read_puzzle("wide".into(), Cursor::new("AB.\n.AB\n")).unwrap();
        let err = parse_raw_puzzle(raw).unwrap_err();

        assert!(
            matches!(err, PuzzleError::SquareMismatch { row: 0, len: 3, size: 2 }),
            "{:?}",
            err,
        );
    }

    #[test]
    fn invalid_cell_rejected_with_position() {
        let raw = read_puzzle("junk".into(), Cursor::new("A#\n.A\n")).unwrap();
        let err = parse_raw_puzzle(raw).unwrap_err();

        assert!(
            matches!(err, PuzzleError::InvalidCell { ch: '#', row: 0, col: 1 }),
            "{:?}",
            err,
        );
    }

    #[test]
    fn permissive_terminal_counts() {
        // one 'A', three 'B's: neither is an error
        let board = parse("AB.\nB..\nB..\n");

        assert_eq!(board.terminals(color('A')).len(), 1);
        assert_eq!(board.terminals(color('B')).len(), 3);
        assert_eq!(board.terminals(color('Z')), &[] as &[Location]);
    }

    #[test]
    fn neighbors_in_priority_order() {
        let board = parse("A.B\n...\nB.A\n");

        // corner: only right and down exist
        assert_eq!(board.neighbors4(Location(0, 0)), vec![Location(0, 1), Location(1, 0)]);
        // center: up, right, down, left
        assert_eq!(
            board.neighbors4(Location(1, 1)),
            vec![Location(0, 1), Location(1, 2), Location(2, 1), Location(1, 0)],
        );
    }

    #[test]
    fn set_overwrites_cell() {
        let mut board = parse("A.B\n...\nB.A\n");

        board.set(Location(1, 1), Cell::Terminus(color('A')));
        assert_eq!(board.get(Location(1, 1)), Cell::Terminus(color('A')));

        let mut rendered = Vec::new();
        board.render(&mut rendered).unwrap();
        assert_eq!(String::from_utf8(rendered).unwrap(), "A.B
.A.
B.A
");
    }

    #[test]
    fn in_bounds_edges() {
        let board = parse("A.B\n...\nB.A\n");

        assert!(board.in_bounds(Location(0, 0)));
        assert!(board.in_bounds(Location(2, 2)));
        assert!(!board.in_bounds(Location(3, 0)));
        assert!(!board.in_bounds(Location(0, 3)));
    }

    #[test]
    fn name_from_final_path_component() {
        let path = std::env::temp_dir().join("flowboard_demo_3x3.txt");
        std::fs::write(&path, "A.B\n...\nB.A\n").unwrap();

        let raw = load_puzzle_from_file(&path).unwrap();
        assert_eq!(raw.name, "flowboard_demo_3x3.txt");
        assert_eq!(raw.grid_lines, vec!["A.B", "...", "B.A"]);

        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = load_puzzle_from_file("no/such/puzzle.txt").unwrap_err();
        assert!(matches!(err, PuzzleError::Io(_)), "{:?}", err);
    }

    #[test]
    fn color_rejects_non_letters() {
        assert!(Color::try_from('.').is_err());
        assert!(Color::try_from('3').is_err());
        assert!(Color::try_from('é').is_err());
        assert_eq!(Color::try_from('q').unwrap().as_char(), 'Q');
    }
}
