#[cfg(test)]
mod tests {
    use crate::cli::validation::{parse_function_name, parse_generation, parse_region};
    use crate::cli::{Cli, Command};
    use clap::Parser;
    use nextfire_config::Generation;
    use std::path::PathBuf;

    #[test]
    fn test_parse_function_name_valid_identifiers() {
        assert_eq!(parse_function_name("ssr"), Ok("ssr".to_string()));
        assert_eq!(parse_function_name("_next"), Ok("_next".to_string()));
        assert_eq!(parse_function_name("$app"), Ok("$app".to_string()));
        assert_eq!(parse_function_name("nextServer2"), Ok("nextServer2".to_string()));
    }

    #[test]
    fn test_parse_function_name_invalid() {
        assert!(parse_function_name("").is_err());
        assert!(parse_function_name("2fast").is_err());
        assert!(parse_function_name("my-app").is_err());
        assert!(parse_function_name("my.app").is_err());
        assert!(parse_function_name("my app").is_err());
    }

    #[test]
    fn test_parse_generation() {
        assert_eq!(parse_generation("1"), Ok(Generation::V1));
        assert_eq!(parse_generation("v2"), Ok(Generation::V2));
        assert_eq!(parse_generation("gcfv1"), Ok(Generation::V1));
        assert!(parse_generation("3").is_err());
        assert!(parse_generation("latest").is_err());
    }

    #[test]
    fn test_parse_region() {
        assert_eq!(parse_region("europe-west1"), Ok("europe-west1".to_string()));
        assert!(parse_region("").is_err());
        assert!(parse_region("   ").is_err());
    }

    #[test]
    fn test_global_flags() {
        let cli = Cli::parse_from([
            "nextfire",
            "routes",
            "--verbose",
            "--no-color",
            "--cwd",
            "apps/web",
            "--config",
            "deploy/nextfire.toml",
        ]);

        assert!(cli.verbose);
        assert!(!cli.quiet);
        assert!(cli.no_color);
        assert_eq!(cli.cwd, Some(PathBuf::from("apps/web")));
        assert_eq!(cli.config, Some(PathBuf::from("deploy/nextfire.toml")));
        assert!(matches!(cli.command, Command::Routes(_)));
    }

    #[test]
    fn test_verbose_conflicts_with_quiet() {
        let result = Cli::try_parse_from(["nextfire", "check", "--verbose", "--quiet"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_build_args() {
        let cli = Cli::parse_from([
            "nextfire",
            "build",
            "--out-dir",
            "deploy",
            "--dist-dir",
            "build",
            "--name",
            "web",
            "--region",
            "europe-west1",
            "--generation",
            "1",
            "--client-options",
            "firebase.config.json",
        ]);

        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };
        assert_eq!(args.out_dir, Some(PathBuf::from("deploy")));
        assert_eq!(args.project.dist_dir, Some(PathBuf::from("build")));
        assert_eq!(args.function.name.as_deref(), Some("web"));
        assert_eq!(args.function.region.as_deref(), Some("europe-west1"));
        assert_eq!(args.function.generation, Some(Generation::V1));
        assert_eq!(args.client_options, Some(PathBuf::from("firebase.config.json")));

        let overrides = args.function.overrides();
        assert_eq!(overrides.name.as_deref(), Some("web"));
        assert!(!overrides.is_empty());
    }

    #[test]
    fn test_invalid_function_name_rejected_at_parse_time() {
        let result = Cli::try_parse_from(["nextfire", "descriptor", "--name", "my-app"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_package_write_flag() {
        let cli = Cli::parse_from(["nextfire", "package", "--write", "--node-version", "20"]);
        let Command::Package(args) = cli.command else {
            panic!("expected package command");
        };
        assert!(args.write);
        assert_eq!(args.node_version.as_deref(), Some("20"));
    }

    #[test]
    fn test_project_args_overrides() {
        let cli = Cli::parse_from(["nextfire", "build", "--public-dir", "static"]);
        let Command::Build(args) = cli.command else {
            panic!("expected build command");
        };

        let overrides = args.project.overrides();
        assert_eq!(overrides.public_dir, Some(PathBuf::from("static")));
        assert!(overrides.dist_dir.is_none());
        assert!(overrides.function.is_empty());
    }
}
