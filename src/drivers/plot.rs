use std::io::Cursor;
use image::{DynamicImage, ImageBuffer, ImageFormat, Rgb};
use plotters::prelude::LineSeries;
use plotters::prelude::*;
use crate::drivers::error::SignalError;
use crate::drivers::fft::FrequencySpectrum;
use crate::drivers::TraceFrame;
#[derive(Clone, Debug)]
pub struct PlotStyle {
    pub width: u32,
    pub height: u32,
    pub background: RGBColor,
    pub palette: Vec<RGBColor>,
}
impl Default for PlotStyle {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 600,
            background: RGBColor(10, 10, 10),
            palette: vec![CYAN, RED, GREEN, YELLOW, MAGENTA, BLUE, WHITE],
        }
    }
}
fn check_palette(style: &PlotStyle) -> Result<(), SignalError> {
    if style.palette.is_empty() {
        return Err(SignalError::Plot("plot style has an empty palette".into()));
    }
    Ok(())
}
/// Draw every trace of `frame` against its time axis.
pub fn render_traces_png(frame: &TraceFrame, style: &PlotStyle) -> Result<Vec<u8>, SignalError> {
    check_palette(style)?;
    let (y_min, y_max) = frame
        .value_bounds()
        .ok_or_else(|| SignalError::Plot("trace frame has no samples".into()))?;
    let (x_min, x_max) = match (frame.time.first(), frame.time.last()) {
        (Some(&a), Some(&b)) if b > a => (a, b),
        _ => return Err(SignalError::Plot("time axis is degenerate".into())),
    };
    let y_bounds = if (y_max - y_min).abs() < f64::EPSILON {
        (y_min - 1.0, y_max + 1.0)
    } else {
        let pad = (y_max - y_min) * 0.05;
        (y_min - pad, y_max + pad)
    };
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption("Generated Signal", ("sans-serif", 20).into_font().color(&WHITE))
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(x_min..x_max, y_bounds.0..y_bounds.1)?;
        chart
            .configure_mesh()
            .x_desc("time")
            .light_line_style(&WHITE.mix(0.1))
            .label_style(("sans-serif", 12).into_font().color(&WHITE))
            .draw()?;
        for (idx, trace) in frame.series.iter().enumerate() {
            let color = style.palette[idx % style.palette.len()];
            let points = frame.time.iter().copied().zip(trace.iter().copied());
            chart
                .draw_series(LineSeries::new(points, &color))?
                .label(
                    frame
                        .labels
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| format!("Trace {idx}")),
                )
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
        chart
            .configure_series_labels()
            .border_style(&WHITE.mix(0.2))
            .background_style(&style.background)
            .label_font(("sans-serif", 14).into_font().color(&WHITE))
            .draw()?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
pub fn render_spectrum_png(
    spectrum: &FrequencySpectrum,
    style: &PlotStyle,
) -> Result<Vec<u8>, SignalError> {
    check_palette(style)?;
    if spectrum.magnitudes.is_empty() || spectrum.frequencies.len() < 2 {
        return Err(SignalError::Plot("spectrum has no magnitudes".into()));
    }
    let f_max = spectrum.frequencies.last().copied().unwrap_or(1.0);
    let m_max = spectrum
        .magnitudes
        .iter()
        .flat_map(|m| m.iter().copied())
        .fold(0.0f64, f64::max)
        .max(1e-3);
    let mut buffer = vec![0u8; (style.width * style.height * 3) as usize];
    {
        let root = BitMapBackend::with_buffer(&mut buffer, (style.width, style.height))
            .into_drawing_area();
        root.fill(&style.background)?;
        let mut chart = ChartBuilder::on(&root)
            .margin(10)
            .caption("FFT Magnitude", ("sans-serif", 20).into_font().color(&WHITE))
            .set_label_area_size(LabelAreaPosition::Left, 50)
            .set_label_area_size(LabelAreaPosition::Bottom, 40)
            .build_cartesian_2d(0f64..f_max, 0f64..m_max)?;
        chart
            .configure_mesh()
            .x_desc("cycles per unit time")
            .light_line_style(&WHITE.mix(0.1))
            .label_style(("sans-serif", 12).into_font().color(&WHITE))
            .draw()?;
        for (idx, mags) in spectrum.magnitudes.iter().enumerate() {
            let color = style.palette[idx % style.palette.len()];
            let series = spectrum
                .frequencies
                .iter()
                .copied()
                .zip(mags.iter().copied());
            chart
                .draw_series(LineSeries::new(series, &color))?
                .label(
                    spectrum
                        .labels
                        .get(idx)
                        .cloned()
                        .unwrap_or_else(|| format!("Trace {idx}")),
                )
                .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], &color));
        }
        chart
            .configure_series_labels()
            .border_style(&WHITE.mix(0.2))
            .background_style(&style.background)
            .label_font(("sans-serif", 14).into_font().color(&WHITE))
            .draw()?;
        root.present()?;
    }
    encode_png(&buffer, style.width, style.height)
}
fn encode_png(buffer: &[u8], width: u32, height: u32) -> Result<Vec<u8>, SignalError> {
    let image = ImageBuffer::<Rgb<u8>, _>::from_raw(width, height, buffer.to_vec())
        .ok_or_else(|| SignalError::Plot("failed to allocate image buffer".into()))?;
    let mut output = Vec::new();
    let dynamic = DynamicImage::ImageRgb8(image);
    dynamic.write_to(&mut Cursor::new(&mut output), ImageFormat::Png)?;
    Ok(output)
}
#[cfg(test)]
mod tests {
    use super::*;
    use crate::drivers::fft::SpectrumBuilder;
    use crate::drivers::{
        FirKernel, NoiseInjector, Quantizer, SignalPipeline, WaveformGenerator, WaveformKind,
    };
    const PNG_MAGIC: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
    #[test]
    fn plotting_helpers_return_png() {
        let signal = SignalPipeline::new(
            WaveformGenerator::new(WaveformKind::Sine, 5.0).unwrap(),
            NoiseInjector::new(0.2, Some(11)).unwrap(),
            Quantizer::default(),
            Some(FirKernel::default()),
        )
        .run(256)
        .unwrap();
        let style = PlotStyle::default();
        let png_traces = render_traces_png(&signal.trace_frame().unwrap(), &style).unwrap();
        let frame = signal.sample_frame().unwrap();
        let spectrum = SpectrumBuilder::for_frame(&frame).compute(&frame).unwrap();
        let png_fft = render_spectrum_png(&spectrum, &style).unwrap();
        assert!(png_traces.starts_with(&PNG_MAGIC));
        assert!(png_fft.starts_with(&PNG_MAGIC));
    }
    #[test]
    fn empty_palette_is_a_plot_error() {
        let frame = TraceFrame::new(vec![0.0, 0.25, 0.5, 0.75, 1.0])
            .with_trace("a", vec![0.0, 1.0, 0.0, -1.0, 0.0])
            .unwrap();
        let style = PlotStyle {
            palette: vec![],
            ..PlotStyle::default()
        };
        assert!(matches!(
            render_traces_png(&frame, &style),
            Err(SignalError::Plot(_))
        ));
        let spectrum = SpectrumBuilder::with_size(4).compute(&frame).unwrap();
        assert!(matches!(
            render_spectrum_png(&spectrum, &style),
            Err(SignalError::Plot(_))
        ));
    }
    #[test]
    fn empty_frame_is_a_plot_error() {
        let frame = TraceFrame::new(vec![0.0, 1.0]);
        assert!(matches!(
            render_traces_png(&frame, &PlotStyle::default()),
            Err(SignalError::Plot(_))
        ));
    }
    #[test]
    fn empty_spectrum_is_a_plot_error() {
        let spectrum = FrequencySpectrum {
            sample_rate: 1.0,
            frequencies: vec![],
            magnitudes: vec![],
            labels: vec![],
        };
        assert!(render_spectrum_png(&spectrum, &PlotStyle::default()).is_err());
    }
}
