use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: Option<u64>,
    pub profession: Option<String>,
    pub currency: String,
    /// 0 when the employer left it empty
    #[serde(default)]
    pub payment_from: f64,
    #[serde(default)]
    pub payment_to: f64,
}

#[derive(Deserialize, Debug)]
pub struct ApiResponse {
    pub objects: Vec<Vacancy>,
    pub total: u32,
    pub more: bool,
}
