use serde::Deserialize;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Salary {
    pub currency: Option<String>,
    pub from: Option<f64>,
    pub to: Option<f64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct Vacancy {
    pub id: Option<String>,
    pub name: Option<String>,
    pub salary: Option<Salary>,
}

#[derive(Deserialize, Debug)]
pub struct ApiResponse {
    pub items: Vec<Vacancy>,
    pub found: u32,
    pub pages: u32,
}
