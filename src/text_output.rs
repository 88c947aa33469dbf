//! Fixed-width terminal tables for reports
//!
//! Integers are thousands-separated; floats use fixed decimals with unit
//! suffixes (`ms`, `s`, `%`, `x`, `ns/elemento`).

use crate::cli::ReportMode;
use crate::report::Report;

/// Render a report in the requested mode
pub fn format_report(report: &Report, mode: ReportMode) -> String {
    match mode {
        ReportMode::Complete => format_complete(report),
        ReportMode::Experimental => format_experimental(report),
        ReportMode::Theoretical => format_theoretical(report),
    }
}

/// Group digits in threes with commas, e.g. `1,000,000`
pub fn group_thousands(n: u64) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    grouped
}

/// Full comparison of measured timings against both models
pub fn format_complete(report: &Report) -> String {
    let mut out = String::new();
    let wide = "=".repeat(120);

    out.push_str(&format!("{}\n", wide));
    out.push_str("TABELA COMPARATIVA DETALHADA: Resultados Experimentais vs Previsoes Teoricas\n");
    out.push_str(&format!("{}\n", wide));
    out.push_str(&format!(
        "{:<12} {:<12} {:<12} {:<10} {:<15} {:<15} {:<10} {:<12} {:<12}\n",
        "n",
        "T_for(Exp)",
        "T_for(Teo)",
        "Erro%",
        "T_lambda(Exp)",
        "T_lambda(Teo)",
        "Erro%",
        "Dif(Exp)",
        "Dif(Teo)"
    ));
    out.push_str(&format!("{}\n", "-".repeat(120)));

    for row in &report.rows {
        out.push_str(&format!(
            "{:<12} {:<12.1} {:<12.1} {:<10.1}% {:<15.1} {:<15.1} {:<10.1}% {:<12.1} {:<12.1}\n",
            group_thousands(row.n),
            row.imperative.measured_ms,
            row.imperative.predicted_ms,
            row.imperative.relative_error_pct,
            row.higher_order.measured_ms,
            row.higher_order.predicted_ms,
            row.higher_order.relative_error_pct,
            row.diff_measured_ms,
            row.diff_predicted_ms
        ));
    }
    out.push_str(&format!("{}\n", wide));

    let summary = &report.summary;
    let imperative = &report.imperative_model;
    let higher_order = &report.higher_order_model;

    out.push_str("\nESTATISTICAS DA COMPARACAO:\n");
    out.push_str(&format!("{}\n", "-".repeat(50)));
    out.push_str(&format!(
        "Coeficiente linear For:     {:.7} ms/elemento  ({:.1} ns/elemento)\n",
        imperative.slope,
        imperative.slope_ns_per_element()
    ));
    out.push_str(&format!(
        "Coeficiente linear Lambda:  {:.7} ms/elemento  ({:.1} ns/elemento)\n",
        higher_order.slope,
        higher_order.slope_ns_per_element()
    ));
    out.push_str(&format!(
        "Diferenca nos coeficientes: {:.1}%\n",
        summary.coefficient_difference_pct
    ));
    out.push_str(&format!(
        "\nErro medio absoluto For:     {:.1}%\n",
        summary.mean_error_imperative
    ));
    out.push_str(&format!(
        "Erro medio absoluto Lambda:  {:.1}%\n",
        summary.mean_error_higher_order
    ));
    out.push_str(&format!(
        "Erro medio total:            {:.1}%\n",
        summary.mean_error_overall
    ));
    out.push_str(&format!(
        "\nCoeficiente de determinacao (R2): For {:.4}, Lambda {:.4}\n",
        summary.r_squared_imperative, summary.r_squared_higher_order
    ));

    if let (Some(fit_for), Some(fit_lambda)) =
        (&summary.fitted_imperative, &summary.fitted_higher_order)
    {
        out.push_str("Ajuste por minimos quadrados:\n");
        out.push_str(&format!("  T_for(n)    ~ {}\n", fit_for.equation()));
        out.push_str(&format!("  T_lambda(n) ~ {}\n", fit_lambda.equation()));
    }

    if summary.r_squared_imperative > 0.99 && summary.r_squared_higher_order > 0.99 {
        out.push_str(
            "\nCONCLUSAO: O modelo teorico Theta(n) explica muito bem o comportamento observado!\n",
        );
    }

    out
}

/// Measured timings only: differences, percent slower and ratio
pub fn format_experimental(report: &Report) -> String {
    let mut out = String::new();
    let wide = "=".repeat(80);

    out.push_str(&format!("{}\n", wide));
    out.push_str("TABELA DE DADOS - Analise Experimental\n");
    out.push_str(&format!("{}\n", wide));
    out.push_str(&format!(
        "{:<15} {:<12} {:<15} {:<18} {:<15}\n",
        "N Elementos", "For (ms)", "Lambda (ms)", "Diferenca (ms)", "% Mais Lento"
    ));
    out.push_str(&format!("{}\n", "-".repeat(80)));

    for row in &report.rows {
        out.push_str(&format!(
            "{:<15} {:<12.1} {:<15.1} {:<18.1} {:<15.1}%\n",
            group_thousands(row.n),
            row.imperative.measured_ms,
            row.higher_order.measured_ms,
            row.diff_measured_ms,
            row.percent_slower
        ));
    }
    out.push_str(&format!("{}\n", wide));

    out.push_str("\nRESUMO ESTATISTICO:\n");
    out.push_str(&format!(
        "- Media diferenca percentual: {:.1}%\n",
        report.summary.mean_percent_slower
    ));
    out.push_str(&format!(
        "- Media razao Lambda/For: {:.2}x\n",
        report.summary.mean_ratio
    ));
    out.push_str("- Comportamento: Ambas funcoes sao O(n) - crescimento linear\n");
    if report.summary.mean_ratio > 1.0 {
        out.push_str("- Recomendacao: Use a funcao com 'for' para melhor desempenho\n");
    } else if report.summary.mean_ratio < 1.0 {
        out.push_str("- Recomendacao: Use a funcao com lambda para melhor desempenho\n");
    }

    out
}

/// Model equations per strategy
pub fn format_theoretical(report: &Report) -> String {
    let mut out = String::new();
    let rule = "=".repeat(60);

    out.push_str(&format!("{}\n", rule));
    out.push_str(&format!("{:^60}\n", "ANALISE TEORICA DE COMPLEXIDADE"));
    out.push_str(&format!("{}\n", rule));
    out.push_str("Modelo Matematico Identificado: Linear O(n)\n\n");
    out.push_str(&format!(
        "Equacao do Loop For:   T(n) = {}\n",
        report.imperative_model.equation()
    ));
    out.push_str(&format!(
        "Equacao do Lambda:     T(n) = {}\n",
        report.higher_order_model.equation()
    ));
    out.push_str(&format!("{}\n", "-".repeat(60)));

    out
}
