use crate::chat::ChartRequest;

pub const EMPTY_GALLERY_TEXT: &str = "Your generated charts will appear here.";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ChartCard {
    pub id: u64,
    pub title: String,
}

/// Chart placeholders created from chat requests, plus the one opened in the
/// enlarged modal.
#[derive(Debug, Default)]
pub struct Dashboard {
    charts: Vec<ChartCard>,
    selected: Option<u64>,
}

impl Dashboard {
    pub fn add_chart(&mut self, req: ChartRequest) {
        self.charts.push(ChartCard {
            id: req.id,
            title: req.title,
        });
    }

    pub fn charts(&self) -> &[ChartCard] {
        &self.charts
    }

    pub fn is_empty(&self) -> bool {
        self.charts.is_empty()
    }

    /// Open the modal for `id`. Unknown ids leave the selection unchanged.
    pub fn select(&mut self, id: u64) -> bool {
        if self.charts.iter().any(|c| c.id == id) {
            self.selected = Some(id);
            true
        } else {
            false
        }
    }

    pub fn close_modal(&mut self) {
        self.selected = None;
    }

    pub fn selected(&self) -> Option<&ChartCard> {
        let id = self.selected?;
        self.charts.iter().find(|c| c.id == id)
    }
}
