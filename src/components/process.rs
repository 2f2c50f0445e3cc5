use yew::prelude::*;

use crate::content::{DiagramNode, PROCESSES, PRODUCTS, RAW_MATERIALS};
use crate::state::navigation::Section;

const DIAGRAM_WIDTH: u32 = 1200;
const FIRST_ROW_Y: u32 = 120;
const ROW_PITCH: u32 = 130;
const ARROW_Y_OFFSET: u32 = 40;

#[derive(Debug, Clone, Copy, PartialEq)]
enum Column {
    Material,
    Process,
    Product,
}

impl Column {
    fn x(&self) -> u32 {
        match self {
            Column::Material => 20,
            Column::Process => 340,
            Column::Product => 740,
        }
    }

    fn width(&self) -> u32 {
        match self {
            Column::Material => 260,
            Column::Process => 340,
            Column::Product => 380,
        }
    }

    fn nodes(&self) -> &'static [DiagramNode] {
        match self {
            Column::Material => RAW_MATERIALS,
            Column::Process => PROCESSES,
            Column::Product => PRODUCTS,
        }
    }

    fn fill(&self) -> &'static str {
        match self {
            Column::Process => "#14202b",
            _ => "#071823",
        }
    }

    fn title_color(&self) -> &'static str {
        match self {
            Column::Material => "#ffb37a",
            _ => "#ffd9b3",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Arrow {
    pub from_x: u32,
    pub to_x: u32,
    pub y: u32,
    pub stroke: &'static str,
}

fn row_y(row: usize) -> u32 {
    FIRST_ROW_Y + row as u32 * ROW_PITCH
}

fn node_height(node: &DiagramNode) -> u32 {
    if node.note.is_some() {
        100
    } else {
        80
    }
}

fn diagram_height() -> u32 {
    row_y(RAW_MATERIALS.len()) + 20
}

/// One arrow per row from each column's right edge to the next column.
pub fn arrows() -> Vec<Arrow> {
    [
        (Column::Material, Column::Process, "#ffb37a"),
        (Column::Process, Column::Product, "#cfe7f6"),
    ]
    .into_iter()
    .flat_map(|(from, to, stroke)| {
        (0..from.nodes().len()).map(move |row| Arrow {
            from_x: from.x() + from.width(),
            to_x: to.x(),
            y: row_y(row) + ARROW_Y_OFFSET,
            stroke,
        })
    })
    .collect()
}

fn render_column(column: Column) -> Html {
    column
        .nodes()
        .iter()
        .enumerate()
        .map(|(row, node)| {
            let transform = format!("translate({},{})", column.x(), row_y(row));
            html! {
                <g class="node" {transform}>
                    <rect x="0" y="0" width={column.width().to_string()} height={node_height(node).to_string()}
                        rx="10" fill={column.fill()} stroke="#123241" stroke-width="2" />
                    <text x="16" y="28" fill={column.title_color()} font-size="15" font-weight="700">{node.title}</text>
                    <text x="16" y="50" fill="#cfe7f6" font-size="13">{node.detail}</text>
                    {
                        if let Some(note) = node.note {
                            html! { <text x="16" y="72" fill="#9cc9e0" font-size="12">{note}</text> }
                        } else {
                            html! {}
                        }
                    }
                </g>
            }
        })
        .collect()
}

#[function_component(Process)]
pub fn process() -> Html {
    let view_box = format!("0 0 {} {}", DIAGRAM_WIDTH, diagram_height());

    html! {
        <section id={Section::Process.id()} class="page-section section-tinted">
            <div class="section-inner section-wide">
                <div class="section-heading">
                    <h2>{"The "}<span class="accent">{"TUKUNA Cycle"}</span></h2>
                    <p>{"Recycling & manufacturing roadmap — Mars"}</p>
                </div>
                <div class="diagram-frame">
                    <div class="diagram-scroll">
                        <svg viewBox={view_box} xmlns="http://www.w3.org/2000/svg" preserveAspectRatio="xMidYMin meet">
                            <defs>
                                <marker id="arrow" markerWidth="12" markerHeight="12" refX="9" refY="6" orient="auto">
                                    <path d="M0,0 L12,6 L0,12 z" fill="#e6eef6" />
                                </marker>
                            </defs>
                            <rect x="10" y="10" width="1180" height="80" rx="12" fill="#14202b" stroke="#0b1116" stroke-width="2" />
                            <text x="30" y="55" fill="#e6eef6" font-size="22" font-weight="700">
                                {"Recycling and Manufacturing Routes Map — Mars"}
                            </text>
                            { render_column(Column::Material) }
                            { render_column(Column::Process) }
                            { render_column(Column::Product) }
                            <g fill="none" stroke-width="2.5" marker-end="url(#arrow)">
                                {
                                    arrows().into_iter().map(|arrow| html! {
                                        <path stroke={arrow.stroke}
                                            d={format!("M{},{} L{},{}", arrow.from_x, arrow.y, arrow.to_x, arrow.y)} />
                                    }).collect::<Html>()
                                }
                            </g>
                        </svg>
                    </div>
                </div>
                <div class="diagram-legend">
                    <span>{"🟥 Raw Materials"}</span>
                    <span>{"🟦 Processes / Machines"}</span>
                    <span>{"🟨 Final Products"}</span>
                </div>
            </div>
            <style>
                {r#"
                .diagram-frame {
                    padding: 1.5rem;
                    border-radius: 1rem;
                    border: 1px solid rgba(120, 53, 15, 0.2);
                    background: linear-gradient(180deg, rgba(10, 10, 15, 0.8), rgba(0, 0, 0, 0.9));
                    box-shadow: 0 10px 30px rgba(0, 0, 0, 0.7);
                }
                .diagram-scroll {
                    overflow-x: auto;
                    overflow-y: hidden;
                }
                .diagram-scroll svg {
                    display: block;
                    min-width: 1200px;
                }
                .diagram-legend {
                    margin-top: 2rem;
                    display: flex;
                    flex-wrap: wrap;
                    justify-content: center;
                    gap: 1rem;
                    color: #9ca3af;
                    font-size: 0.875rem;
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_arrow_per_row_per_gap() {
        let arrows = arrows();
        assert_eq!(arrows.len(), RAW_MATERIALS.len() + PROCESSES.len());
    }

    #[test]
    fn test_arrows_bridge_column_gaps() {
        for arrow in arrows() {
            assert!(arrow.from_x < arrow.to_x);
            assert!(arrow.to_x == Column::Process.x() || arrow.to_x == Column::Product.x());
        }
        let first = arrows()[0];
        assert_eq!(first.from_x, 280);
        assert_eq!(first.to_x, 340);
        assert_eq!(first.y, 160);
    }

    #[test]
    fn test_columns_do_not_overlap() {
        let columns = [Column::Material, Column::Process, Column::Product];
        for pair in columns.windows(2) {
            assert!(pair[0].x() + pair[0].width() < pair[1].x());
        }
        let last = Column::Product;
        assert!(last.x() + last.width() <= DIAGRAM_WIDTH);
    }

    #[test]
    fn test_tallest_node_fits_in_row() {
        let nodes = RAW_MATERIALS.iter().chain(PROCESSES).chain(PRODUCTS);
        assert!(nodes.map(node_height).all(|h| h < ROW_PITCH));
        assert!(diagram_height() > row_y(RAW_MATERIALS.len() - 1) + 100);
    }
}
