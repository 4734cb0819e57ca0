//! End-to-end tests for the interactive menu loop over in-memory streams

use std::io::Cursor;
use tasker::Priority;
use tasker::cli::{Shell, ShellConfig};

fn run(input: &str, config: ShellConfig) -> String {
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
    shell.run().unwrap();
    String::from_utf8(shell.into_output()).unwrap()
}

#[test]
fn test_full_session_transcript() {
    let input = "1\nWrite report\n1\n\
                 1\nBuy milk\n3\n\
                 1\nCall Bob\n1\n\
                 3\n2\n\
                 4\n\
                 5\n";
    let output = run(input, ShellConfig::default());

    let announce_at = output.find("Task: Write report [Priority: HIGH]").unwrap();
    let second_at = output.find("Task: Call Bob [Priority: HIGH]").unwrap();
    assert!(announce_at < second_at);

    let listing_at = output.rfind("High Priority Tasks:").unwrap();
    let listing = &output[listing_at..];
    assert!(listing.starts_with(
        "High Priority Tasks:\nMedium Priority Tasks:\nLow Priority Tasks:\n- Buy milk [Priority: LOW]\n"
    ));
    assert!(output.ends_with("Exiting Task Manager.\n"));
    assert_eq!(output.matches("Task Manager Menu:").count(), 6);
}

#[test]
fn test_session_state_after_removal() {
    let config = ShellConfig {
        show_menu: false,
        ..ShellConfig::default()
    };
    let input = "1\nshared\n1\n1\nshared\n2\n1\nother\n2\n2\nshared\n5\n";
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
    shell.run().unwrap();

    let manager = shell.manager();
    assert_eq!(manager.len(), 1);
    assert!(manager.tier(Priority::High).unwrap().is_empty());
    assert_eq!(
        manager
            .tier(Priority::Medium)
            .unwrap()
            .front()
            .unwrap()
            .description(),
        "other"
    );
}

#[test]
fn test_negative_announce_count_announces_nothing() {
    let config = ShellConfig {
        show_menu: false,
        ..ShellConfig::default()
    };
    let output = run("1\nstay\n2\n3\n-4\n4\n5\n", config);

    assert!(!output.contains("Task: stay"));
    assert!(output.contains("- stay [Priority: MEDIUM]"));
}

#[test]
fn test_numbers_with_trailing_text_are_accepted() {
    let config = ShellConfig {
        show_menu: false,
        ..ShellConfig::default()
    };
    let input = "1x\nWrite report\n1st\n3abc\n2tasks\n5\n";
    let mut shell = Shell::new(Cursor::new(input.as_bytes().to_vec()), Vec::new(), config);
    shell.run().unwrap();

    assert!(shell.manager().is_empty());
    let output = String::from_utf8(shell.into_output()).unwrap();
    assert!(output.contains("Task added successfully."));
    assert!(output.contains("Task: Write report [Priority: HIGH]"));
    assert!(!output.contains("Invalid input"));
    assert!(output.ends_with("Exiting Task Manager.\n"));
}
