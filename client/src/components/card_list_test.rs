use super::*;

struct Row {
    id: &'static str,
    label: &'static str,
}

impl Keyed for Row {
    fn key(&self) -> &'static str {
        self.id
    }
}

static ROWS: [Row; 3] = [
    Row { id: "a", label: "First" },
    Row { id: "b", label: "Second" },
    Row { id: "c", label: "Second" },
];

static NO_ROWS: [Row; 0] = [];

fn row(record: &'static Row) -> AnyView {
    view! { <span class="row">{record.label}</span> }.into_any()
}

#[test]
fn empty_input_renders_no_cards() {
    let html = view! { <CardList records=NO_ROWS.as_slice() class="rows" render=row/> }.to_html();
    assert!(html.contains("class=\"rows\""));
    assert_eq!(html.matches("card-list__item").count(), 0);
    assert!(!html.contains("class=\"row\""));
}

#[test]
fn one_card_per_record_in_input_order() {
    let html = view! { <CardList records=ROWS.as_slice() class="rows" render=row/> }.to_html();
    assert_eq!(html.matches("class=\"card-list__item\"").count(), ROWS.len());
    let positions: Vec<usize> = ROWS
        .iter()
        .map(|r| html.find(&format!("data-key=\"{}\"", r.id)).unwrap())
        .collect();
    assert!(positions.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn repeated_labels_keep_their_own_cards() {
    let html = view! { <CardList records=ROWS.as_slice() class="rows" render=row/> }.to_html();
    assert_eq!(html.matches("Second").count(), 2);
}
