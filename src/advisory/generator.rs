use crate::analysis::{is_legume, sowing_month0};
use crate::models::{AdvisoryRequest, CropProfile, WaterRequirement};

/// Growing days assumed when the crop has no profile.
const DEFAULT_GROWING_DAYS: u32 = 100;

/// Render the templated farming advisory for a request.
///
/// The output is markdown-ish text with `**Title:**` section headers, which
/// [`parse_sections`](super::parse_sections) can split back apart.
pub fn generate_advisory(request: &AdvisoryRequest, crop: Option<&CropProfile>) -> String {
    let water = crop
        .map(|c| c.water_requirement.to_string().to_lowercase())
        .unwrap_or_else(|| "moderate".to_string());
    let growing_days = crop.map(|c| c.growing_days).unwrap_or(DEFAULT_GROWING_DAYS);
    let irrigation_note = if request.irrigation().is_rainfed() {
        "weather-dependent; consider supplementary irrigation during dry spells"
    } else {
        "well-suited for this crop"
    };

    let kharif = matches!(sowing_month0(&request.sowing_date), Some(5..=7));
    let risk_line = if kharif {
        "Sowing time is optimal for Kharif season"
    } else {
        "Consider adjusting sowing date for better yield"
    };

    let rotation_line = if is_legume(&request.previous_crop) {
        format!(
            "Legume rotation benefit: Your previous {} crop has added ~20-25 kg/ha of nitrogen to the soil",
            request.previous_crop
        )
    } else {
        "Consider rotating with legumes next season to improve soil nitrogen naturally".to_string()
    };

    let water_line = match crop.map(|c| c.water_requirement) {
        Some(WaterRequirement::High) => {
            "Maintain 5-7 cm standing water during critical growth stages. Drain water 15 days before harvest."
        }
        _ => "Apply irrigation at critical growth stages only. Avoid waterlogging.",
    };

    let mut out = String::new();
    out.push_str(&format!(
        "**Farming Advisory for {} ({})**\n\n",
        request.crop, request.variety
    ));

    out.push_str("**Optimal Growing Conditions:**\n");
    out.push_str(&format!("- {} requires {water} water availability\n", request.crop));
    out.push_str(&format!("- Expected growing period: {growing_days} days\n"));
    out.push_str(&format!(
        "- Your {} irrigation is {irrigation_note}\n\n",
        request.irrigation_type
    ));

    out.push_str("**Fertilizer Application Schedule:**\n");
    out.push_str("1. **Basal Application (At sowing):**\n");
    out.push_str("   - Apply 50% of DAP and 100% of MOP\n");
    out.push_str("   - Mix well with soil before sowing\n\n");
    out.push_str("2. **First Top Dressing (21-25 days after sowing):**\n");
    out.push_str("   - Apply 50% of Urea\n");
    out.push_str("   - Ensure soil moisture before application\n\n");
    out.push_str("3. **Second Top Dressing (40-45 days after sowing):**\n");
    out.push_str("   - Apply remaining 50% of Urea\n");
    out.push_str("   - Apply during active tillering/vegetative growth\n\n");

    out.push_str(&format!("**Region-Specific Tips for {}:**\n", request.district));
    out.push_str("- Monitor local weather forecasts during monsoon season\n");
    out.push_str(&format!(
        "- {} typically receives adequate rainfall from June to September\n",
        request.district
    ));
    out.push_str("- Watch for common pests in this region and apply preventive measures\n\n");

    out.push_str(&format!("**Risk Alerts:**\n{risk_line}\n\n"));
    out.push_str(&format!("**Previous Crop Benefit:**\n{rotation_line}\n\n"));
    out.push_str(&format!("**Water Management:**\n- {water_line}\n\n"));
    out.push_str(
        "For personalized guidance, contact your local Krishi Vigyan Kendra (KVK) or Agriculture Department office.",
    );
    out
}
