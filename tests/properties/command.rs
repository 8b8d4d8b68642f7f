//! Property tests for deploy command composition.

use proptest::prelude::*;

use deployurl::config::DeployConfig;
use deployurl::{build_command, DeployOptions};

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: arguments stay discrete tokens, whatever characters they hold.
    #[test]
    fn property_arguments_are_never_split(
        project in "[ -~]{1,30}",
        include in proptest::collection::vec("[ -~]{1,20}", 0..=4),
        production in any::<bool>(),
        append in any::<bool>(),
    ) {
        let config = DeployConfig {
            project: project.clone(),
            include: include.clone(),
            append_entrypoint: append,
            ..DeployConfig::default()
        };
        let options = DeployOptions { production, rest: vec![] };

        let spec = build_command(&config, &options);
        let args = spec.arguments();

        let expected_len = 2 + include.len() + usize::from(production) + usize::from(append);
        prop_assert_eq!(args.len(), expected_len);
        prop_assert_eq!(&args[0], "deploy");
        prop_assert_eq!(args[1].clone(), format!("--project={}", project));
        prop_assert_eq!(args.contains(&"--production".to_string()), production);
        for (arg, path) in args[2..].iter().zip(&include) {
            prop_assert_eq!(arg.clone(), format!("--include={}", path));
        }
    }
}
