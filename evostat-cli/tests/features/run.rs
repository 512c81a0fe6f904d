use crate::extensions::run::config::*;
use std::io::BufReader;
use std::path::Path;

fn run_with_stats_file(json: &str, stats_path: &Path) -> Vec<String> {
    let mut config = read_config(BufReader::new(json.as_bytes())).unwrap();
    config.statistics.get_or_insert_with(Default::default).file = Some(stats_path.to_string_lossy().to_string());

    create_evolution_from_config(&config).unwrap().run().unwrap();

    std::fs::read_to_string(stats_path).unwrap().lines().map(|line| line.to_string()).collect()
}

#[test]
fn can_repeat_run_with_the_same_seed() {
    let json = r#"{
      "problem": { "type": "zdt3", "numVariables": 10 },
      "population": { "subpopulations": 2, "size": 10, "elites": 1 },
      "termination": { "maxGenerations": 5 },
      "statistics": { "gatherSubpops": true },
      "environment": { "seed": 11, "parallelism": 2, "logging": { "enabled": false } }
    }"#;
    let tmpdir = tempfile::tempdir().unwrap();

    let first = run_with_stats_file(json, tmpdir.path().join("first.txt").as_path());
    let second = run_with_stats_file(json, tmpdir.path().join("second.txt").as_path());

    assert_eq!(first.len(), 5);
    assert_eq!(first, second);
}

#[test]
fn can_run_every_problem_variant() {
    let tmpdir = tempfile::tempdir().unwrap();

    ["zdt1", "zdt2", "zdt3"].iter().for_each(|variant| {
        let json = format!(
            r#"{{
              "problem": {{ "type": "{variant}", "numVariables": 5 }},
              "population": {{ "size": 8 }},
              "termination": {{ "maxGenerations": 7 }},
              "statistics": {{ "modulus": 3, "gatherFull": true }},
              "environment": {{ "seed": 5, "logging": {{ "enabled": false }} }}
            }}"#
        );

        let lines = run_with_stats_file(json.as_str(), tmpdir.path().join(format!("{variant}.txt")).as_path());

        let generations = lines.iter().filter_map(|line| line.split_whitespace().next()).collect::<Vec<_>>();
        assert_eq!(generations, vec!["0", "3", "6"]);
        lines.iter().flat_map(|line| line.split_whitespace()).for_each(|value| {
            assert!(value.parse::<f64>().is_ok_and(|value| value.is_finite()), "unexpected value: '{value}'");
        });
    });
}
