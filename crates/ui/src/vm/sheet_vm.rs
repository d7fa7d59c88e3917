use tracker_core::model::Sheet;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SheetCardVm {
    pub id: String,
    pub title: String,
    pub description: Option<String>,
    pub image: Option<String>,
    pub difficulty: Option<String>,
}

impl From<&Sheet> for SheetCardVm {
    fn from(sheet: &Sheet) -> Self {
        Self {
            id: sheet.id().as_str().to_owned(),
            title: sheet.title().to_owned(),
            description: sheet.description().map(str::to_owned),
            image: sheet.image().map(str::to_owned),
            difficulty: sheet.difficulty().map(str::to_owned),
        }
    }
}

#[must_use]
pub fn map_sheet_cards(sheets: &[Sheet]) -> Vec<SheetCardVm> {
    sheets.iter().map(SheetCardVm::from).collect()
}
