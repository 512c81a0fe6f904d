use super::*;

#[test]
fn can_mutate_items_in_parallel() {
    let mut items = (0..100).collect::<Vec<i32>>();

    parallel_foreach_mut(items.as_mut_slice(), |item| *item *= 2);

    assert_eq!(items, (0..100).map(|item| item * 2).collect::<Vec<_>>());
}

#[test]
fn can_execute_on_thread_pool() {
    let pool = ThreadPool::new(2).expect("cannot create pool");
    let mut items = vec![1., 2., 3., 4.];

    let result = pool.execute(|| {
        parallel_foreach_mut(items.as_mut_slice(), |item: &mut f64| *item = item.sqrt());
        rayon::current_num_threads()
    });

    assert_eq!(result, 2);
    assert_eq!(items[3], 2.);
}
