/// Demo resume served by `GET /api/v1/portfolio/sample`. Indented the way
/// text layers usually come out of PDF decoders.
pub const SAMPLE_RESUME: &str = r#"
          John Doe
          Senior Full Stack Developer

          Email: john.doe@email.com
          Phone: +1 (555) 123-4567
          Location: San Francisco, CA
          LinkedIn: linkedin.com/in/johndoe
          GitHub: github.com/johndoe

          Summary:
          Experienced full-stack developer with 5+ years of experience building scalable web applications using modern technologies. Passionate about creating efficient, user-friendly solutions and leading development teams.

          Experience:
          Senior Full Stack Developer
          Tech Solutions Inc.
          Jan 2022 - Present
          • Led development of microservices architecture serving 1M+ users
          • Implemented CI/CD pipelines reducing deployment time by 60%
          • Mentored junior developers and conducted code reviews
          • Technologies: React, Node.js, PostgreSQL, AWS, Docker

          Full Stack Developer
          StartupXYZ
          Jun 2020 - Dec 2021
          • Built responsive web applications using React and Express.js
          • Designed and implemented RESTful APIs
          • Collaborated with design team to implement pixel-perfect UIs
          • Technologies: JavaScript, React, MongoDB, Express.js

          Education:
          Bachelor of Science in Computer Science
          University of California, Berkeley
          2016 - 2020

          Skills:
          JavaScript, TypeScript, Python, React, Node.js, Express.js, PostgreSQL, MongoDB, AWS, Docker, Git, Agile, Problem Solving, Leadership, Communication

          Projects:
          E-commerce Platform Project
          Built a full-stack e-commerce platform with payment integration, inventory management, and admin dashboard. Technologies: React, Node.js, Stripe API, PostgreSQL.

          Task Management App Project
          Developed a collaborative task management application with real-time updates and team collaboration features. Technologies: React, Socket.io, Express.js, MongoDB.
"#;
