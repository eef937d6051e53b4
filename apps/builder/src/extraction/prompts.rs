// Resume extraction prompt templates.

pub const RESUME_EXTRACT_SYSTEM: &str = "\
You are an expert healthcare staffing recruiter and a precise resume data extractor. \
You MUST respond with valid JSON only — no markdown fences, no explanations. \
Use null for anything the resume does not state. Never invent license numbers or dates.";

pub const RESUME_EXTRACT_PROMPT: &str = r#"Extract ALL structured data from this nurse resume. Be THOROUGH — do not miss any certifications, licenses, or work history entries.

CRITICAL RULES:
- Extract EVERY certification mentioned anywhere in the resume (BLS, ACLS, PALS, TNCC, CCRN, CNOR, CEN, NRP, ENPC, NIH Stroke Scale, AWHONN, RNC-OB, PCCN, OCN, MEDSURG-BC, etc.)
- Certifications can appear in headers, bullet points, after names, in skills sections, or anywhere else
- Extract EVERY license with state, type, compact status, and any license numbers/expiration dates
- Extract ALL work history entries with full details
- Look for charge nurse experience, preceptor experience, committee participation
- Identify the primary specialty from the most recent/prominent experience

Return ONLY valid JSON with this exact structure:

{
  "personalInfo": {
    "fullName": "First Middle Last, Credentials",
    "phone": "(xxx) xxx-xxxx",
    "email": "email@example.com",
    "location": "City, State ZIP"
  },
  "licenses": [
    {
      "state": "XX",
      "type": "RN",
      "compact": true,
      "licenseNumber": "if found",
      "issueDate": "if found",
      "expirationDate": "if found"
    }
  ],
  "certifications": [
    {
      "name": "BLS",
      "issuingBody": "AHA",
      "certNumber": "if found",
      "issueDate": "if found",
      "expirationDate": "if found"
    }
  ],
  "education": {
    "degree": "BSN/MSN/ADN",
    "school": "University Name",
    "graduationDate": "Month Year"
  },
  "workHistory": [
    {
      "title": "Job Title — Unit Type",
      "facility": "Hospital/Facility Name",
      "city": "City",
      "state": "ST",
      "unit": "ICU/ER/Med-Surg/etc",
      "startDate": "Month Year",
      "endDate": "Month Year or Present",
      "responsibilities": ["responsibility 1", "responsibility 2"],
      "chargeExperience": true,
      "preceptorExperience": false
    }
  ],
  "yearsExperience": 6,
  "primarySpecialty": "ICU"
}

RESUME TEXT:
{resume_text}"#;
