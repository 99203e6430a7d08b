#![no_main]

use libfuzzer_sys::fuzz_target;
use outpost::Board;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // Anything that parses must print back to a board that parses the same
    if let Ok(board) = text.parse::<Board>() {
        let printed = board.to_string();
        let reparsed: Board = printed.parse().expect("printed board must parse");
        assert_eq!(board, reparsed);
    }
});
