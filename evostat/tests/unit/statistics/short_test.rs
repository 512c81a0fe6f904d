use super::*;
use crate::helpers::models::{create_scalar_candidate, create_scalar_population};
use crate::helpers::statistics::{FakeProbe, SharedBuffer};

fn create_statistics(config: StatisticsConfig) -> (ShortStatistics, SharedBuffer, FakeProbe) {
    let buffer = SharedBuffer::default();
    let probe = FakeProbe::default();
    let statistics =
        ShortStatistics::new(&config, buffer.create_log(), Box::new(probe.clone())).expect("cannot create statistics");

    (statistics, buffer, probe)
}

/// Drives statistics hooks through one generation the way the run driver does.
fn run_generation(statistics: &mut ShortStatistics, generation: usize, population: &Population) {
    let empty = Population::default();

    if generation == 0 {
        statistics.pre_initialization(&RunState::new(0, &empty)).unwrap();
        statistics.post_initialization(&RunState::new(0, population)).unwrap();
    } else {
        statistics.pre_breeding(&RunState::new(generation - 1, population)).unwrap();
        statistics.post_breeding(&RunState::new(generation - 1, population)).unwrap();
    }

    statistics.pre_evaluation(&RunState::new(generation, population)).unwrap();
    statistics.post_evaluation(&RunState::new(generation, population)).unwrap();
}

fn get_best_values(statistics: &ShortStatistics) -> Vec<Option<Float>> {
    statistics.best_so_far().iter().map(|best| best.map(|best| best.fitness.value())).collect()
}

#[test]
fn can_write_default_line() {
    let (mut statistics, buffer, _) = create_statistics(StatisticsConfig::default());
    let population = create_scalar_population(vec![vec![(2, 1., true), (2, 3., true), (2, 5., false)]]);

    run_generation(&mut statistics, 0, &population);

    assert_eq!(buffer.lines(), vec!["0 2 3 3 ".to_string()]);
}

#[test]
fn can_write_full_line_with_subpopulations() {
    let config = StatisticsConfig::default().with_full(true).with_subpops(true);
    let (mut statistics, buffer, probe) = create_statistics(config);
    let population =
        create_scalar_population(vec![vec![(2, 1., true), (4, 3., true)], vec![(3, 10., false)]]);
    let empty = Population::default();

    statistics.pre_initialization(&RunState::new(0, &empty)).unwrap();
    probe.advance(5, 100);
    statistics.post_initialization(&RunState::new(0, &population)).unwrap();
    statistics.pre_evaluation(&RunState::new(0, &population)).unwrap();
    probe.advance(7, -20);
    statistics.post_evaluation(&RunState::new(0, &population)).unwrap();

    assert_eq!(buffer.lines(), vec!["0 5 100 7 -20 3 3 2 3 3 4 4 0 0 0 0 0 0 0 3 3 2 3 3 4 4 ".to_string()]);
}

#[test]
fn can_attribute_breeding_timing_to_next_generation() {
    let config = StatisticsConfig::default().with_full(true);
    let (mut statistics, buffer, probe) = create_statistics(config);
    let population = create_scalar_population(vec![vec![(1, 1., true)]]);
    let empty = Population::default();

    statistics.pre_initialization(&RunState::new(0, &empty)).unwrap();
    statistics.post_initialization(&RunState::new(0, &population)).unwrap();
    statistics.pre_evaluation(&RunState::new(0, &population)).unwrap();
    statistics.post_evaluation(&RunState::new(0, &population)).unwrap();

    statistics.pre_breeding(&RunState::new(0, &population)).unwrap();
    probe.advance(11, 64);
    statistics.post_breeding(&RunState::new(0, &population)).unwrap();
    statistics.pre_evaluation(&RunState::new(1, &population)).unwrap();
    probe.advance(2, 0);
    statistics.post_evaluation(&RunState::new(1, &population)).unwrap();

    let lines = buffer.lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "0 0 0 0 0 1 1 1 1 1 1 1 ");
    assert_eq!(lines[1], "1 11 64 2 0 1 1 1 1 1 1 1 ");
}

#[test]
fn can_keep_best_so_far_monotonic() {
    let (mut statistics, buffer, _) = create_statistics(StatisticsConfig::default());

    run_generation(&mut statistics, 0, &create_scalar_population(vec![vec![(2, 3., true), (2, 1., true)]]));
    assert_eq!(get_best_values(&statistics), vec![Some(3.)]);

    run_generation(&mut statistics, 1, &create_scalar_population(vec![vec![(2, 2., true), (2, 1., true)]]));
    assert_eq!(get_best_values(&statistics), vec![Some(3.)]);

    run_generation(&mut statistics, 2, &create_scalar_population(vec![vec![(2, 5., true), (2, 4., true)]]));
    assert_eq!(get_best_values(&statistics), vec![Some(5.)]);

    assert_eq!(buffer.lines(), vec!["0 2 3 3 ", "1 1.5 2 3 ", "2 4.5 5 5 "]);
}

#[test]
fn can_keep_incumbent_on_tie() {
    let config = StatisticsConfig::default().with_full(true);
    let (mut statistics, _, _) = create_statistics(config);

    run_generation(&mut statistics, 0, &create_scalar_population(vec![vec![(2, 3., true)]]));
    run_generation(&mut statistics, 1, &create_scalar_population(vec![vec![(5, 3., true)]]));

    let best = statistics.best_so_far()[0].expect("no best so far");
    assert_eq!(best.size(), 2);
}

#[test]
fn can_store_independent_copy_of_best() {
    let (mut statistics, _, _) = create_statistics(StatisticsConfig::default());
    let mut population = create_scalar_population(vec![vec![(2, 3., true)]]);

    run_generation(&mut statistics, 0, &population);
    population.subpops[0].individuals[0].fitness.set_objectives(&[100.]);
    population.subpops[0].individuals[0].genome.clear();

    let best = statistics.best_so_far()[0].expect("no best so far");
    assert_eq!(best.fitness.value(), 3.);
    assert_eq!(best.size(), 2);
}

#[test]
fn can_skip_subpopulation_without_evaluated_candidates() {
    let config = StatisticsConfig::default().with_subpops(true);
    let (mut statistics, buffer, _) = create_statistics(config);

    run_generation(&mut statistics, 0, &create_scalar_population(vec![vec![(2, 1., true)], vec![(2, 4., true)]]));
    run_generation(&mut statistics, 1, &create_scalar_population(vec![vec![(2, 2., true)], vec![(2, 9., false)]]));

    assert_eq!(get_best_values(&statistics), vec![Some(2.), Some(4.)]);
    assert_eq!(buffer.lines(), vec!["0 1 1 1 4 4 4 2.5 4 4 ", "1 2 2 2 0 0 4 2 2 4 "]);
}

#[test]
fn can_report_zeros_when_nothing_is_evaluated() {
    let config = StatisticsConfig::default().with_full(true).with_subpops(true);
    let (mut statistics, buffer, _) = create_statistics(config);

    run_generation(&mut statistics, 0, &create_scalar_population(vec![vec![(2, 1., false)]]));

    assert_eq!(get_best_values(&statistics), vec![None]);
    assert_eq!(statistics.pooled_best_so_far().map(|best| best.fitness.value()), None);
    assert_eq!(buffer.lines(), vec!["0 ".repeat(1 + 2 + 2 + 7 + 7)]);
}

parameterized_test! {can_sample_generations_by_modulus, (modulus, generations, expected), {
    can_sample_generations_by_modulus_impl(modulus, generations, expected);
}}

can_sample_generations_by_modulus! {
    case01_every: (1, 4, vec!["0", "1", "2", "3"]),
    case02_every_third: (3, 7, vec!["0", "3", "6"]),
    case03_every_second: (2, 6, vec!["0", "2", "4"]),
    case04_larger_than_run: (10, 5, vec!["0"]),
}

fn can_sample_generations_by_modulus_impl(modulus: usize, generations: usize, expected: Vec<&str>) {
    let config = StatisticsConfig::default().with_modulus(modulus).with_full(true).with_subpops(true);
    let (mut statistics, buffer, _) = create_statistics(config);
    let population = create_scalar_population(vec![vec![(2, 1., true)], vec![(2, 2., true)]]);

    (0..generations).for_each(|generation| run_generation(&mut statistics, generation, &population));

    let lines = buffer.lines();
    let first_columns = lines.iter().filter_map(|line| line.split_whitespace().next()).collect::<Vec<_>>();
    assert_eq!(first_columns, expected);
    assert!(lines.iter().all(|line| line.split_whitespace().count() == 1 + 2 + 2 + 7 * 3));
}

#[test]
fn can_calculate_pooled_mean_independent_of_partitioning() {
    let values = vec![(2, 1., true), (2, 2., true), (2, 4., false), (2, 8., true), (2, 16., true)];
    let expected_mean = (1. + 2. + 8. + 16.) / 4.;

    let partitions = vec![
        vec![values.clone()],
        vec![values[..2].to_vec(), values[2..].to_vec()],
        vec![values[..1].to_vec(), values[1..3].to_vec(), values[3..].to_vec()],
    ];

    partitions.into_iter().for_each(|partition| {
        let (mut statistics, buffer, _) = create_statistics(StatisticsConfig::default());

        run_generation(&mut statistics, 0, &create_scalar_population(partition));

        let line = buffer.lines().pop().unwrap();
        let columns = line.split_whitespace().map(|value| value.parse::<Float>().unwrap()).collect::<Vec<_>>();
        assert_eq!(columns, vec![0., expected_mean, 16., 16.]);
    });
}

#[test]
fn can_pick_pooled_best_so_far_across_subpopulations() {
    let (mut statistics, _, _) = create_statistics(StatisticsConfig::default());

    run_generation(
        &mut statistics,
        0,
        &create_scalar_population(vec![vec![(2, 1., false)], vec![(2, 7., true)], vec![(2, 3., true)]]),
    );

    assert_eq!(statistics.pooled_best_so_far().map(|best| best.fitness.value()), Some(7.));
    assert_eq!(statistics.running()[1].total_count(), 1);
    assert_eq!(statistics.running()[0].total_count(), 0);
}

#[test]
fn can_accumulate_mean_size_so_far() {
    let config = StatisticsConfig::default().with_full(true);
    let (mut statistics, buffer, _) = create_statistics(config);

    run_generation(&mut statistics, 0, &create_scalar_population(vec![vec![(2, 1., true), (4, 1., true)]]));
    run_generation(&mut statistics, 1, &create_scalar_population(vec![vec![(6, 1., true), (6, 1., false)]]));

    let lines = buffer.lines();
    assert_eq!(lines[1], "1 0 0 0 0 6 4 1 1 1 6 2 ");
    assert_eq!(statistics.running()[0].mean_size(), 4.);
}

#[test]
fn cannot_aggregate_without_initialization() {
    let (mut statistics, _, _) = create_statistics(StatisticsConfig::default());
    let population = create_scalar_population(vec![vec![(2, 1., true)]]);

    let result = statistics.post_evaluation(&RunState::new(0, &population));

    assert!(result.is_err());
}

#[test]
fn cannot_create_statistics_with_zero_modulus() {
    let result = ShortStatistics::new(
        &StatisticsConfig::default().with_modulus(0),
        SharedBuffer::default().create_log(),
        Box::new(FakeProbe::default()),
    );

    assert!(result.is_err());
}

#[test]
fn can_keep_pooled_incumbent_on_tie_across_subpopulations() {
    let config = StatisticsConfig::default().with_full(true);
    let (mut statistics, buffer, _) = create_statistics(config);

    run_generation(&mut statistics, 0, &create_scalar_population(vec![vec![(2, 1., true)], vec![(5, 3., true)]]));
    run_generation(&mut statistics, 1, &create_scalar_population(vec![vec![(2, 3., true)], vec![(5, 0., true)]]));

    let pooled_best = statistics.pooled_best_so_far().unwrap();
    assert_eq!((pooled_best.size(), pooled_best.fitness.value()), (5, 3.));
    let last_line = buffer.lines().pop().unwrap();
    let columns = last_line.split_whitespace().collect::<Vec<_>>();
    // best fitness this generation and so far, then best size this generation and so far
    assert_eq!(columns[columns.len() - 4..], ["3", "3", "2", "5"]);
}
