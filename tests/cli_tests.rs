//! Integration tests for CLI functionality

#[cfg(feature = "cli")]
mod cli_integration_tests {
    use clap::Parser;
    use std::fs;
    use std::path::{Path, PathBuf};
    use tempfile::TempDir;

    use wordtool::cli::commands::{execute, open_word_tool};
    use wordtool::cli::paths::PersistentConfig;
    use wordtool::cli::Cli;

    fn write_dictionary(dir: &Path) -> PathBuf {
        let path = dir.join("words.txt");
        fs::write(&path, "cat\ncart\nart\ntar\nrat\ncats\n").unwrap();
        path
    }

    fn run(dir: &Path, extra_args: &[&str]) -> String {
        let dict = write_dictionary(dir);
        let output = dir.join("out.txt");
        let config = dir.join("config.json");

        let mut args = vec![
            "wordtool".to_string(),
            "-d".to_string(),
            dict.display().to_string(),
            "-o".to_string(),
            output.display().to_string(),
            "--config".to_string(),
            config.display().to_string(),
        ];
        args.extend(extra_args.iter().map(|s| s.to_string()));

        execute(Cli::parse_from(args)).unwrap();
        fs::read_to_string(output).unwrap()
    }

    #[test]
    fn test_available_letters() {
        let temp_dir = TempDir::new().unwrap();
        let out = run(temp_dir.path(), &["-a", "cart"]);
        assert_eq!(out, "cat\ncart\nart\ntar\nrat\n");
    }

    #[test]
    fn test_count_only() {
        let temp_dir = TempDir::new().unwrap();
        let out = run(temp_dir.path(), &["-c", "-p", "^c"]);
        assert_eq!(out, "3\n");
    }

    #[test]
    fn test_sorted_output() {
        let temp_dir = TempDir::new().unwrap();
        let out = run(temp_dir.path(), &["-s", "a", "-x", "s"]);
        assert_eq!(out, "art\ncart\ncat\nrat\ntar\n");

        let out = run(temp_dir.path(), &["-s", "aL"]);
        assert_eq!(out, "cart\ncats\nart\ncat\nrat\ntar\n");
    }

    #[test]
    fn test_length_and_include() {
        let temp_dir = TempDir::new().unwrap();
        let out = run(temp_dir.path(), &["-i", "r", "--max", "3"]);
        assert_eq!(out, "art\ntar\nrat\n");
    }

    #[test]
    fn test_no_matches() {
        let temp_dir = TempDir::new().unwrap();
        let out = run(temp_dir.path(), &["-x", "t"]);
        assert_eq!(out, "\n");
    }

    #[test]
    fn test_invalid_pattern_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let dict = write_dictionary(temp_dir.path());
        let config = temp_dir.path().join("config.json");

        let cli = Cli::parse_from([
            "wordtool",
            "-d",
            dict.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
            "-p",
            "(",
        ]);
        let err = execute(cli).unwrap_err();
        assert!(err.to_string().contains("Invalid pattern"));
    }

    #[test]
    fn test_missing_dictionary_is_reported() {
        let temp_dir = TempDir::new().unwrap();
        let missing = temp_dir.path().join("missing.txt");
        let err = open_word_tool(Some(missing.as_path())).unwrap_err();
        assert!(err.to_string().contains("missing.txt"));
    }

    #[test]
    fn test_config_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("nested").join("config.json");

        let config = PersistentConfig {
            dictionary: Some(PathBuf::from("/usr/share/dict/words")),
            sort: Some("aL".to_string()),
        };
        config.save_to(Some(path.as_path())).unwrap();

        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_missing_config_gives_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("absent.json");
        let loaded = PersistentConfig::load_from(Some(path.as_path())).unwrap();
        assert_eq!(loaded, PersistentConfig::default());
    }

    #[test]
    fn test_saved_defaults_are_used() {
        let temp_dir = TempDir::new().unwrap();
        let dict = write_dictionary(temp_dir.path());
        let config = temp_dir.path().join("config.json");
        let output = temp_dir.path().join("out.txt");

        let cli = Cli::parse_from([
            "wordtool",
            "-d",
            dict.to_str().unwrap(),
            "-s",
            "A",
            "--config",
            config.to_str().unwrap(),
            "--save-defaults",
            "-c",
            "-o",
            output.to_str().unwrap(),
        ]);
        execute(cli).unwrap();

        // No -d or -s this time: both come from the saved config.
        let cli = Cli::parse_from([
            "wordtool",
            "--config",
            config.to_str().unwrap(),
            "-a",
            "cart",
            "-o",
            output.to_str().unwrap(),
        ]);
        execute(cli).unwrap();
        assert_eq!(fs::read_to_string(&output).unwrap(), "tar\nrat\ncat\ncart\nart\n");
    }

    #[test]
    fn test_bad_sort_in_config() {
        let temp_dir = TempDir::new().unwrap();
        let dict = write_dictionary(temp_dir.path());
        let config = temp_dir.path().join("config.json");
        fs::write(&config, r#"{ "sort": "q" }"#).unwrap();

        let cli = Cli::parse_from([
            "wordtool",
            "-d",
            dict.to_str().unwrap(),
            "--config",
            config.to_str().unwrap(),
        ]);
        let err = execute(cli).unwrap_err();
        assert!(err.to_string().contains("Invalid sort specifier"));
    }
}
