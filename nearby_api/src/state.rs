use nearby_core::dataset::Dataset;

pub struct AppState {
    pub dataset: Dataset,
    pub title: Option<String>,
}
