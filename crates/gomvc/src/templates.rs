//! Go source templates for the generated Gin service
//!
//! `{{MODULE}}` marks every import path that points at another generated package.

/// cmd/api/main.go
pub const MAIN: &str = r#"package main

import (
	"fmt"
	"github.com/gin-gonic/gin"
	"{{MODULE}}/router"
)

func main() {
	fmt.Println("Starting the Gin server...")
	r := gin.Default()
	router.InitializeRoutes(r)
	r.Run(":8080")
}
"#;

/// controller/home_controller.go
pub const CONTROLLER: &str = r#"package controller

import (
	"net/http"
	"github.com/gin-gonic/gin"
)

// HomeController handles requests for the home route
func HomeController(c *gin.Context) {
	c.JSON(http.StatusOK, gin.H{"message": "Hello from HomeController!"})
}
"#;

/// models/user.go
pub const MODEL: &str = r#"package models

// User represents a sample user model
type User struct {
	ID    int    `json:"id"`
	Name  string `json:"name"`
	Email string `json:"email"`
}
"#;

/// pkg/utility.go
pub const UTILITY: &str = r#"package pkg

import "fmt"

// PrintMessage prints a message to the console
func PrintMessage(msg string) {
	fmt.Println(msg)
}
"#;

/// router/router.go
pub const ROUTER: &str = r#"package router

import (
	"github.com/gin-gonic/gin"
	"{{MODULE}}/controller"
	"{{MODULE}}/middleware"
)

// InitializeRoutes sets up the application's routes
func InitializeRoutes(r *gin.Engine) {
	r.Use(middleware.RequestLogger())

	r.GET("/", controller.HomeController)
}
"#;

/// middleware/request_logger.go
pub const MIDDLEWARE: &str = r#"package middleware

import (
	"fmt"
	"time"

	"github.com/gin-gonic/gin"
)

// RequestLogger logs each request with method, path, and duration
func RequestLogger() gin.HandlerFunc {
	return func(c *gin.Context) {
		startTime := time.Now()
		c.Next()
		duration := time.Since(startTime)
		fmt.Printf("[%s] %s %s %v\n", time.Now().Format(time.RFC3339), c.Request.Method, c.Request.URL.Path, duration)
	}
}
"#;
