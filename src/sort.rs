//! Two textbook comparison sorts.
//!
//! Both return a new sorted vector and leave the input untouched.

/// Quicksort with the first element as pivot.
///
/// Runs in O(n log n) on average and O(n²) on input that is already sorted
/// (in either direction) or made of equal elements.
pub fn quick_sort<T: PartialOrd + Clone>(items: &[T]) -> Vec<T> {
    let Some((pivot, rest)) = items.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![pivot.clone()];
    }

    let (lesser, greater): (Vec<T>, Vec<T>) = rest.iter().cloned().partition(|item| item <= pivot);

    let mut sorted = quick_sort(&lesser);
    sorted.push(pivot.clone());
    sorted.extend(quick_sort(&greater));
    sorted
}

/// Index of the first minimum of `items`, or `None` if it is empty
pub fn find_smallest<T: PartialOrd>(items: &[T]) -> Option<usize> {
    let mut smallest = 0;
    for (index, item) in items.iter().enumerate().skip(1) {
        if *item < items[smallest] {
            smallest = index;
        }
    }
    (!items.is_empty()).then_some(smallest)
}

/// Selection sort: repeatedly moves the smallest remaining element to the output
pub fn selection_sort<T: PartialOrd>(mut items: Vec<T>) -> Vec<T> {
    let mut sorted = Vec::with_capacity(items.len());
    while let Some(index) = find_smallest(&items) {
        sorted.push(items.remove(index));
    }
    sorted
}
