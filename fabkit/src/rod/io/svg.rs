use crate::rod::entities::{RodInstance, RodSolution};
use svg::Document;
use svg::node::element::{Group, Rectangle, Text, Title};

const SEGMENT_HEIGHT: f32 = 10.0;
const MARGIN: f32 = 2.0;
const FILLS: [&str; 2] = ["#D3C1A5", "#A58F6F"];

/// Draws the rod as a row of consecutive segments, leftmost cut first, each labelled with its length and price.
pub fn rod_solution_to_svg(solution: &RodSolution, instance: &RodInstance, title: &str) -> Document {
    let length = instance.length.max(1) as f32;
    let unit = 100.0 / length;
    let font_size = f32::min(unit * 0.4, SEGMENT_HEIGHT * 0.3);

    let label = Text::new(format!(
        "length: {} | profit: {} | cuts: {} | {}",
        instance.length, solution.max_profit, solution.number_of_cuts, title
    ))
    .set("x", 0.0)
    .set("y", -0.5 * MARGIN)
    .set("font-size", SEGMENT_HEIGHT * 0.25)
    .set("font-family", "monospace")
    .set("font-weight", "500");

    let mut segments = Group::new().set("id", "segments");
    let mut offset = 0;
    for (i, &cut) in solution.cuts.iter().enumerate() {
        let price = instance.prices.price(cut).unwrap_or_default();
        let x = offset as f32 * unit;
        let width = cut as f32 * unit;
        let segment = Group::new()
            .set("id", format!("segment_{i}"))
            .add(
                Rectangle::new()
                    .set("x", x)
                    .set("y", 0.0)
                    .set("width", width)
                    .set("height", SEGMENT_HEIGHT)
                    .set("fill", FILLS[i % FILLS.len()])
                    .set("stroke", "black")
                    .set("stroke-width", 0.2),
            )
            .add(
                Text::new(format!("{cut} ({price})"))
                    .set("x", x + 0.5 * width)
                    .set("y", 0.5 * SEGMENT_HEIGHT)
                    .set("font-size", font_size)
                    .set("font-family", "monospace")
                    .set("text-anchor", "middle")
                    .set("dominant-baseline", "middle"),
            )
            .add(Title::new(format!(
                "segment {i}: length {cut}, price {price}, from {offset} to {}",
                offset + cut
            )));
        segments = segments.add(segment);
        offset += cut;
    }

    //an uncovered rod is drawn as a single hatched bar
    if solution.cuts.is_empty() && instance.length > 0 {
        segments = segments.add(
            Rectangle::new()
                .set("x", 0.0)
                .set("y", 0.0)
                .set("width", 100.0)
                .set("height", SEGMENT_HEIGHT)
                .set("fill", "none")
                .set("stroke", "red")
                .set("stroke-dasharray", "1 1")
                .set("stroke-width", 0.2),
        );
    }

    Document::new()
        .set(
            "viewBox",
            (-MARGIN, -2.0 * MARGIN, 100.0 + 2.0 * MARGIN, SEGMENT_HEIGHT + 3.0 * MARGIN),
        )
        .add(label)
        .add(segments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rod::entities::PriceTable;
    use crate::rod::solve_table;

    #[test]
    fn one_group_per_segment() {
        let instance = RodInstance::new(5, PriceTable::from(vec![2, 5, 7, 8, 10]));
        let solution = solve_table(instance.length, &instance.prices).unwrap();
        let svg = rod_solution_to_svg(&solution, &instance, "test").to_string();
        assert_eq!(svg.matches("id=\"segment_").count(), solution.cuts.len());
    }
}
