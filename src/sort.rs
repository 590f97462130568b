use rand::seq::SliceRandom;

/// Display order for the filtered article set. `Natural` keeps the order the
/// filter produced; `Random` reshuffles on every call and is intentionally
/// not reproducible across toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortMode {
    #[default]
    Natural,
    Random,
}

pub fn reorder(titles: &[String], mode: SortMode) -> Vec<String> {
    let mut out = titles.to_vec();
    if mode == SortMode::Random {
        out.shuffle(&mut rand::thread_rng());
    }
    out
}
