use crate::application::ReplyWriter;

const PDF_REQUEST_REPLY: &str = r#"I understand you'd like me to create content and compile it to PDF. While I can't actually send files or create PDFs directly, I CAN create the content ready for you to save as PDF.

Here's what I can do for you:
1. **Create the actual content** you need (documents, presentations, reports)
2. **Format it properly** for PDF conversion
3. **Provide instructions** on how to save it as PDF

What specific content would you like me to create for you? For example:
- "Create a barangay meeting report"
- "Make a presentation about community projects"
- "Write a letter to municipal officials"

Just tell me what you need, and I'll create it ready for PDF!"#;

const PC_PRESENTATION_REPLY: &str = r#"**PRESENTATION: Building a PC for Barangay Office Use**

🎯 **Slide 1: Title Slide**
- **Title**: Building a Cost-Effective PC for Barangay Operations
- **Subtitle**: A Practical Guide for Government Offices
- **Presenter**: [Your Name/Position]
- **Date**: [Presentation Date]

📊 **Slide 2: Agenda**
• Why Build vs Buy?
• Essential Components
• Step-by-Step Assembly
• Software Setup
• Budget Considerations
• Q&A

💡 **Slide 3: Why Build Your Own PC?**
- **Cost Savings**: 20-30% cheaper than pre-built
- **Customization**: Tailor to specific barangay needs
- **Upgradability**: Easy future improvements
- **Understanding**: Better troubleshooting knowledge

🛠️ **Slide 4: Essential Components**
1. **Processor (CPU)**: Intel i3 or AMD Ryzen 3 (Office tasks)
2. **Motherboard**: H610/B550 chipset with enough USB ports
3. **RAM**: 8GB DDR4 (Expandable to 16GB)
4. **Storage**: 256GB SSD + 1TB HDD for documents
5. **Power Supply**: 500W 80+ Bronze certified
6. **Case**: Mid-tower with good airflow

🔧 **Slide 5: Assembly Steps**
**Step 1**: Install CPU on motherboard
**Step 2**: Mount RAM modules
**Step 3**: Install motherboard in case
**Step 4**: Connect power supply cables
**Step 5**: Install storage drives
**Step 6**: Cable management
**Step 7**: First boot and BIOS setup

💻 **Slide 6: Software Setup**
- **OS**: Windows 10/11 or Linux (for budget)
- **Office Suite**: Microsoft Office or LibreOffice
- **Security**: Antivirus + Firewall
- **Backup**: Automated system backups
- **Government Software**: eBPLS, reporting tools

💰 **Slide 7: Budget Breakdown**
- CPU: ₱5,000-7,000
- Motherboard: ₱4,000-5,000
- RAM: ₱2,000-3,000
- SSD: ₱2,000-3,000
- HDD: ₱2,000-2,500
- PSU: ₱2,500-3,500
- Case: ₱1,500-2,500
- **TOTAL**: ₱19,000-26,500

🎯 **Slide 8: Recommendations for Barangay**
- Start with 2 units for testing
- Train staff on basic maintenance
- Establish backup procedures
- Consider warranty and support

❓ **Slide 9: Q&A**
- Open floor for questions
- Contact information
- Next steps

---
**To save as PDF**: Copy this content to Word or Google Docs, then use File > Save As > PDF"#;

const PC_BUILD_REPLY: &str = r#"**COMPLETE GUIDE: Building a PC for Barangay Office Use**

I'll create a practical guide that you can use directly.

---

**🛠️ PRACTICAL PC BUILD FOR BARANGAY OFFICE**

**BUDGET: ₱20,000-₱25,000**

**COMPONENTS LIST (with Philippine Prices):**

1. **PROCESSOR**: Intel Core i3-12100
   - Price: ₱5,500
   - Why: Efficient for office tasks, good integrated graphics

2. **MOTHERBOARD**: MSI H610M-G
   - Price: ₱4,200
   - Why: Reliable brand, enough connectivity

3. **RAM**: TeamGroup T-Force Vulcan 8GB DDR4 3200MHz
   - Price: ₱1,800
   - Why: Good performance, can add another 8GB later

4. **STORAGE**:
   - SSD: Kingston NV2 256GB NVMe - ₱1,600
   - HDD: Seagate Barracuda 1TB - ₱2,200
   - Why: Fast boot + ample document storage

5. **POWER SUPPLY**: FSP Hyper K 500W 80+
   - Price: ₱2,300
   - Why: Reliable brand, sufficient power

6. **CASE**: Tecware Nexus Air M2
   - Price: ₱1,500
   - Why: Good airflow, includes fans

7. **MONITOR**: Any 21.5" 1080p IPS
   - Price: ₱4,500
   - Why: Clear display for documents

**TOTAL ESTIMATED COST: ₱21,600**

---

**🔧 ASSEMBLY INSTRUCTIONS:**

**STEP 1: PREPARATION**
- Work on clean, static-free surface
- Gather all components and tools
- Read motherboard manual

**STEP 2: CPU INSTALLATION**
1. Open CPU socket lever on motherboard
2. Align golden triangle on CPU with socket marker
3. Gently place CPU (NO FORCE needed)
4. Close lever to secure

**STEP 3: RAM INSTALLATION**
1. Open RAM slot clips
2. Align notch on RAM with slot
3. Press firmly until clips snap closed
4. Use slots A2 and B2 for dual channel

**STEP 4: MOTHERBOARD INSTALLATION**
1. Place standoffs in case
2. Install I/O shield
3. Position motherboard
4. Screw in securely (don't overtighten)

**STEP 5: POWER SUPPLY**
1. Install PSU in case
2. Connect 24-pin to motherboard
3. Connect 8-pin CPU power
4. Connect SATA power to drives

**STEP 6: STORAGE**
1. Mount SSD in dedicated slot
2. Mount HDD in drive bay
3. Connect SATA data cables

**STEP 7: FINAL CONNECTIONS**
1. Connect front panel cables (power switch, USB)
2. Connect monitor via HDMI
3. Connect keyboard and mouse

**STEP 8: FIRST BOOT**
1. Power on and enter BIOS (usually DEL key)
2. Check if all components detected
3. Set boot priority to USB
4. Install operating system

---

**💡 FOR BARANGAY USE:**

**SOFTWARE TO INSTALL:**
- Windows 10/11 or Linux Mint
- Microsoft Office/LibreOffice
- Antivirus (Avast Free or Windows Defender)
- Chrome/Firefox browser
- PDF reader
- eBPLS system (if required)

**MAINTENANCE TIPS:**
- Weekly disk cleanup
- Monthly antivirus scans
- Regular Windows updates
- Backup important documents to external drive

**TROUBLESHOOTING COMMON ISSUES:**
- No display: Check monitor cable and RAM seating
- No power: Check front panel connectors
- Beep codes: Consult motherboard manual

---
This guide is ready to use for your barangay PC building project! Would you like me to create any specific documents or presentations based on this?"#;

const COMPILE_CONFIRMATION_REPLY: &str = r#"I understand you want me to compile content into a PDF. Let me create something useful for you!

**BARANGAY OFFICE DIGITAL TOOLS GUIDE**

📋 **Document Prepared for PDF Export**

**1. ESSENTIAL SOFTWARE FOR BARANGAY OFFICE**

• **Microsoft Office Suite**
  - Word: Official documents and letters
  - Excel: Budget tracking and reports
  - PowerPoint: Community presentations

• **Web Browser**
  - Google Chrome or Mozilla Firefox
  - For accessing government online services

• **PDF Reader**
  - Adobe Acrobat Reader (free)
  - For viewing official documents

**2. BASIC COMPUTER MAINTENANCE**

**Weekly Tasks:**
- Run disk cleanup
- Update antivirus definitions
- Backup important files

**Monthly Tasks:**
- Defragment hard drive (if HDD)
- Clean temporary files
- Update software

**3. INTERNET SAFETY PRACTICES**

• Use strong passwords
• Avoid suspicious email links
• Log out of shared computers
• Regular browser cache clearing

**4. EBPLS TROUBLESHOOTING**

**Common Issues:**
- Login problems: Check caps lock, reset password
- Slow performance: Clear browser cache, close other tabs
- Printing issues: Check printer connection, update drivers

**5. CONTACT INFORMATION**

• Municipal IT Support: [Local number]
• DILG Helpdesk: [Regional office contact]
• Emergency technical support: [Backup contact]

---
**TO CREATE PDF:**
1. Copy this content to Microsoft Word
2. Format as needed
3. Go to File > Save As
4. Choose PDF format
5. Save and share!

Would you like me to create a different document or add specific content to this one?"#;

/// A [`ReplyWriter`] that requires no model: it looks for a few request
/// patterns in the message and answers with ready-made content, otherwise it
/// restates the request and lists what the assistant can do.
///
/// Rules, checked in order on the lowercased message:
///
/// 1. `pdf` together with `compile`, `send` or `create`
/// 2. `presentation` together with `bullet`
/// 3. `build a pc` or `building a computer`
/// 4. `yes` together with `compile` or `pdf`
pub struct KeywordReplyWriter;

impl Default for KeywordReplyWriter {
    fn default() -> Self {
        Self::new()
    }
}

impl KeywordReplyWriter {
    pub fn new() -> Self {
        Self
    }

    fn generic_reply(message: &str) -> String {
        format!(
            r#"I'd be happy to help you with **{message}**!

As BarangayAI, I can:
• Create documents, presentations, and reports
• Provide specific formulas and technical guidance
• Generate content ready for your use
• Explain complex topics in simple terms

What would you like me to **create** or **explain** for you? Please be specific about what you need, and I'll provide the actual content!"#
        )
    }
}

impl ReplyWriter for KeywordReplyWriter {
    fn write(&self, _context: &str, message: &str) -> String {
        let lower = message.to_lowercase();
        let has = |needle: &str| lower.contains(needle);

        if has("pdf") && (has("compile") || has("send") || has("create")) {
            PDF_REQUEST_REPLY.to_string()
        } else if has("presentation") && has("bullet") {
            PC_PRESENTATION_REPLY.to_string()
        } else if has("build a pc") || has("building a computer") {
            PC_BUILD_REPLY.to_string()
        } else if has("yes") && (has("compile") || has("pdf")) {
            COMPILE_CONFIRMATION_REPLY.to_string()
        } else {
            Self::generic_reply(message)
        }
    }
}
