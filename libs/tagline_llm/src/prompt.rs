pub struct TaglinePrompt;

impl TaglinePrompt {
    /// Formats the generation prompt. Field values are interpolated verbatim;
    /// missing values are expected to arrive as empty strings.
    pub fn build(
        product: &str,
        description: &str,
        audience: &str,
        tone: &str,
        count: usize,
    ) -> String {
        format!(
            "Generate {} catchy, {} taglines for a product.\n\
             Product: {}\n\
             Description: {}\n\
             Target Audience: {}\n\n\
             Taglines:\n",
            count, tone, product, description, audience
        )
    }
}
