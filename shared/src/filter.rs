//! Status and text filtering shared by the dashboard tabs.
//!
//! Filters never reorder; callers apply the status (or bucket) filter first
//! and the text filter on top of it.

/// A record carrying a closed lifecycle status
pub trait HasStatus {
    type Status: Copy + PartialEq;

    fn status(&self) -> Self::Status;
}

/// A record that can be matched by the search box
pub trait Searchable {
    fn search_fields(&self) -> Vec<&str>;
}

/// A dashboard tab grouping one or more statuses. Every status maps to
/// exactly one bucket, so the buckets of a kind partition any list.
pub trait StatusBucket: Copy + PartialEq + 'static {
    type Status: Copy + PartialEq;

    const ALL: &'static [Self];

    fn of(status: Self::Status) -> Self;

    fn label(&self) -> &'static str;
}

/// Records whose status equals `status`, in their original order.
pub fn filter_by_status<T>(items: &[T], status: T::Status) -> Vec<T>
where
    T: HasStatus + Clone,
{
    items
        .iter()
        .filter(|item| item.status() == status)
        .cloned()
        .collect()
}

/// Records whose status belongs to `bucket`, in their original order.
pub fn filter_by_bucket<T, B>(items: &[T], bucket: B) -> Vec<T>
where
    T: HasStatus + Clone,
    B: StatusBucket<Status = T::Status>,
{
    items
        .iter()
        .filter(|item| B::of(item.status()) == bucket)
        .cloned()
        .collect()
}

/// Number of records per bucket, in `B::ALL` order, for the tab counters.
pub fn bucket_counts<T, B>(items: &[T]) -> Vec<(B, usize)>
where
    T: HasStatus,
    B: StatusBucket<Status = T::Status>,
{
    B::ALL
        .iter()
        .map(|bucket| {
            let count = items.iter().filter(|item| B::of(item.status()) == *bucket).count();
            (*bucket, count)
        })
        .collect()
}

/// Case-insensitive substring match of `query` against any searchable field.
/// A blank query matches everything.
pub fn matches_query<T: Searchable>(item: &T, query: &str) -> bool {
    if query.trim().is_empty() {
        return true;
    }
    let needle = query.to_ascii_lowercase();
    item.search_fields()
        .iter()
        .any(|field| field.to_ascii_lowercase().contains(&needle))
}

pub fn filter_by_text<T>(items: &[T], query: &str) -> Vec<T>
where
    T: Searchable + Clone,
{
    items
        .iter()
        .filter(|item| matches_query(*item, query))
        .cloned()
        .collect()
}
