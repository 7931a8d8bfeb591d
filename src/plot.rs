use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::sample::ModulatedSample;

pub fn generate_html_table(
    sensitivity: f32,
    samples: &[ModulatedSample],
    output_path_str: &str,
) -> Result<(), std::io::Error> {
    let path = Path::new(output_path_str);
    let mut file = File::create(path)?;

    writeln!(file, "<!DOCTYPE html>")?;
    writeln!(file, "<html>")?;
    writeln!(file, "<head>")?;
    writeln!(file, "<title>Phase Modulator Output</title>")?;
    writeln!(file, "<style>")?;
    writeln!(file, "table {{ border-collapse: collapse; }}")?;
    writeln!(file, ".samples {{ width: 100%; }}")?;
    writeln!(file, ".parameters {{ width: auto; }}")?;
    writeln!(file, ".parameters td:nth-child(2) {{ text-align: right; }}")?;
    writeln!(
        file,
        "th, td {{ border: 1px solid #ddd; padding: 8px; text-align: left; }}"
    )?;
    writeln!(file, "th {{ background-color: #f2f2f2; }}")?;
    writeln!(file, "tr:nth-child(even) {{ background-color: #f9f9f9; }}")?;
    writeln!(file, "</style>")?;
    writeln!(file, "</head>")?;
    writeln!(file, "<body>")?;
    writeln!(file, "<h1>Phase Modulator Output</h1>")?;

    writeln!(file, "<h2>Parameters</h2>")?;
    writeln!(file, "<table class=\"parameters\">")?;
    writeln!(file, "<tr>")?;
    writeln!(file, "<th>Parameter</th>")?;
    writeln!(file, "<th>Value</th>")?;
    writeln!(file, "<th>Unit</th>")?;
    writeln!(file, "</tr>")?;
    writeln!(file, "<tr>")?;
    writeln!(file, "<td>Sensitivity</td>")?;
    writeln!(file, "<td>{:.6}</td>", sensitivity)?;
    writeln!(file, "<td>rad/unit</td>")?;
    writeln!(file, "</tr>")?;
    writeln!(file, "<tr>")?;
    writeln!(file, "<td>Samples</td>")?;
    writeln!(file, "<td>{}</td>", samples.len())?;
    writeln!(file, "<td>-</td>")?;
    writeln!(file, "</tr>")?;
    writeln!(file, "</table>")?;
    writeln!(file, "<br>")?;

    writeln!(file, "<h2>Samples</h2>")?;
    writeln!(file, "<table class=\"samples\">")?;
    writeln!(file, "<tr>")?;
    writeln!(file, "<th>Index</th>")?;
    writeln!(file, "<th>Input</th>")?;
    writeln!(file, "<th>Phase (rad)</th>")?;
    writeln!(file, "<th>Real</th>")?;
    writeln!(file, "<th>Imaginary</th>")?;
    writeln!(file, "<th>Magnitude</th>")?;
    writeln!(file, "</tr>")?;

    for sample in samples {
        writeln!(file, "<tr>")?;
        writeln!(file, "<td>{}</td>", sample.index)?;
        writeln!(file, "<td>{:.5}</td>", sample.input)?;
        writeln!(file, "<td>{:.5}</td>", sample.phase)?;
        writeln!(file, "<td>{:.5}</td>", sample.output.re)?;
        writeln!(file, "<td>{:.5}</td>", sample.output.im)?;
        writeln!(file, "<td>{:.5}</td>", sample.magnitude())?;
        writeln!(file, "</tr>")?;
    }

    writeln!(file, "</table>")?;
    writeln!(file, "</body>")?;
    writeln!(file, "</html>")?;

    Ok(())
}
