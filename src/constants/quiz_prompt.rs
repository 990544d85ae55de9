/// Renders the instruction prompt for quiz generation. The output is a pure
/// function of the source text and question count, so prompt + model version
/// is as reproducible as the provider allows (the request itself is sent with
/// temperature 0).
pub fn build_quiz_prompt(text: &str, num_questions: u32) -> String {
    format!(
        "This is the text: {text}\n\
         Generate a quiz with {num_questions} questions for this text.\n\
         Return **only** the quiz in **valid JSON format** as a list of questions with the following fields:\n\
         - question_number: The question number.\n\
         - question: The quiz question.\n\
         - options: A list of answer choices.\n\
         - answer: The correct answer.\n\
         - explanation: A brief explanation for why the answer is correct.\n\
         \n\
         Do not include any explanations, code snippets, or additional text.\n\
         Do not wrap the JSON in code blocks or use triple backticks.\n\
         Do not include a top-level key; just return the list of questions."
    )
}
